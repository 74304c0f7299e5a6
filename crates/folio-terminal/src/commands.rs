//! Built-in portfolio commands.
//!
//! Each command reads the session's `Profile` and describes it as a
//! `Renderable`. Only `help` looks at the registry and only `clear` asks
//! the shell to change the transcript.

use crate::clock::format_date;
use crate::interpreter::{Command, CommandContext, CommandOutput, CommandRegistry};
use crate::renderable::Renderable;

/// Section names listed by `ls`.
pub const SECTIONS: &[&str] = &[
    "about",
    "experience",
    "projects",
    "skills",
    "education",
    "certifications",
    "contact",
    "resume",
];

/// Register all built-in commands into a registry.
///
/// Registration order is the order `help` lists them in.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(EducationCmd));
    reg.register(Box::new(CertificationsCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(SummaryCmd));
}

/// The card shown under the summary when a session starts.
pub(crate) fn welcome_card(shortcuts: &[String]) -> Renderable {
    Renderable::Group(vec![
        Renderable::text(
            "Welcome to my interactive terminal portfolio. \
             Type 'help' to see available commands.",
        ),
        Renderable::QuickLaunch(shortcuts.to_vec()),
    ])
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let rows = ctx
            .registry
            .iter()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect();
        Renderable::section("Available Commands", vec![Renderable::KeyValue(rows)]).into()
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Display information about me"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let p = ctx.profile;
        Renderable::section(
            p.name.clone(),
            vec![
                Renderable::text(p.bio.clone()),
                Renderable::Links(
                    p.links
                        .iter()
                        .map(|l| (l.label.clone(), l.url.clone()))
                        .collect(),
                ),
            ],
        )
        .into()
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Show my work experience"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let jobs = ctx
            .profile
            .experience
            .iter()
            .map(|job| {
                Renderable::section(
                    job.company.clone(),
                    vec![
                        Renderable::text(format!("{} • {}", job.position, job.duration)),
                        Renderable::List(job.points.clone()),
                    ],
                )
            })
            .collect();
        Renderable::Group(jobs).into()
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "View my projects"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let projects = ctx
            .profile
            .projects
            .iter()
            .map(|project| {
                let mut body = Vec::with_capacity(3);
                if let Some(url) = &project.url {
                    body.push(Renderable::link("GitHub", url.clone()));
                }
                body.push(Renderable::text(project.description.clone()));
                body.push(Renderable::List(project.points.clone()));
                Renderable::section(project.name.clone(), body)
            })
            .collect();
        Renderable::Group(projects).into()
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "List my technical skills"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let categories = ctx
            .profile
            .skills
            .iter()
            .map(|cat| {
                Renderable::section(cat.title.clone(), vec![Renderable::List(cat.skills.clone())])
            })
            .collect();
        Renderable::Group(categories).into()
    }
}

// ---------------------------------------------------------------------------
// education
// ---------------------------------------------------------------------------

struct EducationCmd;
impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "Show my educational background"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let entries = ctx
            .profile
            .education
            .iter()
            .map(|q| {
                Renderable::section(q.title.clone(), vec![Renderable::text(q.institution.clone())])
            })
            .collect();
        Renderable::section("Education", entries).into()
    }
}

// ---------------------------------------------------------------------------
// certifications
// ---------------------------------------------------------------------------

struct CertificationsCmd;
impl Command for CertificationsCmd {
    fn name(&self) -> &str {
        "certifications"
    }
    fn description(&self) -> &str {
        "View my certifications"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let certs = ctx
            .profile
            .certifications
            .iter()
            .map(|cert| {
                let body = cert
                    .verify_url
                    .iter()
                    .map(|url| Renderable::link("Verify certification", url.clone()))
                    .collect();
                Renderable::section(cert.title.clone(), body)
            })
            .collect();
        Renderable::section("Certifications", certs).into()
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get my contact information"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let contact = &ctx.profile.contact;
        let rows = contact
            .iter()
            .map(|c| (c.label.clone(), c.value.clone()))
            .collect();
        let links: Vec<(String, String)> = contact
            .iter()
            .filter_map(|c| c.url.as_ref().map(|url| (c.label.clone(), url.clone())))
            .collect();

        let mut body = vec![Renderable::KeyValue(rows)];
        if !links.is_empty() {
            body.push(Renderable::Links(links));
        }
        Renderable::section("Contact Information", body).into()
    }
}

// ---------------------------------------------------------------------------
// resume
// ---------------------------------------------------------------------------

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Download my resume"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let resume = &ctx.profile.resume;
        if resume.url.is_empty() {
            return Renderable::section(
                "Download Resume",
                vec![Renderable::text("No resume is available.")],
            )
            .into();
        }
        let mut body = vec![Renderable::link("Download Resume", resume.url.clone())];
        if !resume.filename.is_empty() {
            body.push(Renderable::text(format!("Saves as \"{}\"", resume.filename)));
        }
        Renderable::section("Download Resume", body).into()
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        ctx.request_clear();
        CommandOutput::None
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List available sections"
    }
    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> CommandOutput {
        Renderable::List(SECTIONS.iter().map(|s| format!("{s}/")).collect()).into()
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        Renderable::text(ctx.profile.handle.clone()).into()
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date and time"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        Renderable::text(format_date(&ctx.clock.now())).into()
    }
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

struct SummaryCmd;
impl Command for SummaryCmd {
    fn name(&self) -> &str {
        "summary"
    }
    fn description(&self) -> &str {
        "Display system information in neofetch style"
    }
    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> CommandOutput {
        let p = ctx.profile;
        Renderable::Group(vec![
            Renderable::KeyValue(
                p.summary
                    .iter()
                    .map(|f| (f.label.clone(), f.value.clone()))
                    .collect(),
            ),
            Renderable::Links(
                p.links
                    .iter()
                    .map(|l| (l.label.clone(), l.url.clone()))
                    .collect(),
            ),
        ])
        .into()
    }
}

//! Biographical content served by the built-in commands.
//!
//! The profile is plain data. Commands turn it into `Renderable` trees;
//! the shell itself never looks inside. A built-in profile is embedded as
//! TOML so the binary works without any files, and a replacement document
//! with the same shape can be loaded at startup.

use std::path::Path;

use folio_types::error::{FolioError, Result};
use serde::Deserialize;

/// A labelled URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A label/value fact on the summary card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// Downloadable resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Resume {
    pub url: String,
    /// Suggested file name for the download.
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub company: String,
    pub position: String,
    pub duration: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Qualification {
    pub title: String,
    pub institution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub title: String,
    #[serde(default)]
    pub verify_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Everything the portfolio commands know about their owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Login-style handle printed by `whoami`.
    pub handle: String,
    pub bio: String,
    pub resume: Resume,
    pub links: Vec<Link>,
    pub summary: Vec<Fact>,
    pub experience: Vec<Job>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Qualification>,
    pub certifications: Vec<Certification>,
    pub contact: Vec<ContactItem>,
}

impl Profile {
    /// Parse a profile document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let profile: Self = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read and parse a profile document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&text)?;
        log::info!("Loaded profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    /// The embedded default profile.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_PROFILE)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Profile("name must not be empty".to_string()));
        }
        if self.handle.trim().is_empty() || self.handle.contains(char::is_whitespace) {
            return Err(FolioError::Profile(format!(
                "invalid handle: {:?}",
                self.handle
            )));
        }
        Ok(())
    }
}

const BUILTIN_PROFILE: &str = r#"
name = "C.V. Anandhraman"
handle = "anandhraman"
bio = """
Site Reliability Engineer with expertise in cloud infrastructure, automation, and DevOps methodologies. \
Proficient in Linux, Kubernetes, and cloud-native technologies. Experienced in managing scalable, \
resilient architectures, ensuring high availability, and optimizing system performance. Passionate \
about building efficient CI/CD pipelines and infrastructure automation."""

[resume]
url = "assets/resume.pdf"
filename = "C.V. Anandhraman - Resume.pdf"

[[links]]
label = "Email"
url = "mailto:mail.anandhraman@gmail.com"

[[links]]
label = "LinkedIn"
url = "https://linkedin.com/in/anandh-raman"

[[links]]
label = "GitHub"
url = "https://github.com/toymakerftw"

[[links]]
label = "Website"
url = "https://toymakerftw.github.io"

[[links]]
label = "Resume"
url = "assets/resume.pdf"

[[summary]]
label = "Name"
value = "C.V. Anandhraman"

[[summary]]
label = "Title"
value = "Site Reliability Engineer"

[[summary]]
label = "OS"
value = "Linux (RHEL, Ubuntu)"

[[summary]]
label = "Shell"
value = "Bash/Zsh"

[[summary]]
label = "Languages"
value = "Python, Go, Bash"

[[summary]]
label = "Cloud"
value = "AWS, GCP, Kubernetes"

[[summary]]
label = "Location"
value = "Kolenchery, India"

[[experience]]
company = "Turbolab Technologies"
position = "Site Reliability Engineer"
duration = "May 2024 - Present"
points = [
    "Managed cloud infrastructure using Terraform for provisioning and automation",
    "Designed and maintained Kubernetes clusters for scalable microservices deployment",
    "Automated CI/CD workflows using GitLab CI/CD and GitHub Actions",
    "Implemented monitoring solutions using Prometheus, Grafana, and ELK Stack",
    "Developed automation scripts for infrastructure management and security compliance",
]

[[experience]]
company = "PKJ Technologies"
position = "Application Developer"
duration = "Aug 2023 - May 2024"
points = [
    "Developed a cloud-based in-house management system using MERN stack",
    "Designed and implemented secure authentication and role-based access control",
    "Integrated PostgreSQL, MySQL, and Redis for optimized database management",
    "Automated deployment processes using Docker and Kubernetes",
    "Streamlined internal workflows by automating data processing tasks",
]

[[projects]]
name = "Recycler"
url = "https://github.com/Toymakerftw/Recycler"
description = "A centralized recycle bin for cloud and on-premise Linux servers, preventing accidental file deletion"
points = [
    "Implements a master-agent architecture for distributed file recovery",
    "Deleted files are moved to an NFS-attached storage with version control",
    "Supports multi-node deployment for large-scale infrastructure",
]

[[projects]]
name = "Triage - Intrusion Detection System"
url = "https://github.com/Toymakerftw/Triage-IDS"
description = "An AI-powered IDS that detects anomalies in network traffic"
points = [
    "Uses an XGBoost model trained on cybersecurity datasets for anomaly detection",
    "Designed for real-time threat monitoring and alerting",
    "Developed in Python with a cloud-native architecture",
]

[[projects]]
name = "Serversage"
url = "https://github.com/Toymakerftw/Serversage"
description = "A cloud-based monitoring system providing real-time insights into system health"
points = [
    "Collects system metrics (CPU, memory, disk usage) from cloud and on-prem servers",
    "Supports integration with Prometheus and Grafana for visualization",
]

[[skills]]
title = "Programming"
skills = ["Python", "Go", "Bash", "JavaScript"]

[[skills]]
title = "Cloud & Infrastructure"
skills = ["Terraform", "Kubernetes", "Docker", "AWS", "GCP"]

[[skills]]
title = "CI/CD & Automation"
skills = ["GitLab CI/CD", "GitHub Actions", "Ansible", "Jenkins"]

[[skills]]
title = "Monitoring & Logging"
skills = ["Prometheus", "Grafana", "ELK Stack", "Zabbix"]

[[skills]]
title = "Networking & Proxies"
skills = ["HAProxy", "Squid Proxy", "Nginx", "Apache"]

[[skills]]
title = "Databases"
skills = ["PostgreSQL", "MySQL", "Redis", "MongoDB"]

[[skills]]
title = "Version Control"
skills = ["Git", "GitHub", "GitLab"]

[[skills]]
title = "Operating Systems"
skills = ["Linux (RHEL, Ubuntu, Debian)", "Windows Server"]

[[education]]
title = "B.Tech - Computer Science and Engineering"
institution = "SNGCE, Kolenchery (2023)"

[[education]]
title = "RHCSA"
institution = "IPSR Solutions, Ernakulam (2017)"

[[education]]
title = "Diploma in Computer Engineering"
institution = "Al Azhar Polytechnic College, Thodupuzha (2017)"

[[certifications]]
title = "RHCSA - Red Hat Certified System Administrator"
verify_url = "https://rhtapps.redhat.com/verify?certId=170-218-770"

[[contact]]
label = "Email"
value = "mail.anandhraman@gmail.com"
url = "mailto:mail.anandhraman@gmail.com"

[[contact]]
label = "Phone"
value = "+91 70127 45003"

[[contact]]
label = "GitHub"
value = "toymakerftw"
url = "https://github.com/toymakerftw"

[[contact]]
label = "LinkedIn"
value = "anandh-raman"
url = "https://www.linkedin.com/in/anandh-raman-942374153"

[[contact]]
label = "Website"
value = "toymakerftw.github.io"
url = "https://toymakerftw.github.io"

[[contact]]
label = "Location"
value = "Kolenchery, Kerala, India"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_parses() {
        let p = Profile::builtin().unwrap();
        assert_eq!(p.name, "C.V. Anandhraman");
        assert_eq!(p.handle, "anandhraman");
        assert_eq!(p.experience.len(), 2);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.skills.len(), 8);
        assert_eq!(p.education.len(), 3);
        assert_eq!(p.certifications.len(), 1);
        assert_eq!(p.contact.len(), 6);
        assert_eq!(p.links.len(), 5);
        assert_eq!(p.summary.len(), 7);
    }

    #[test]
    fn builtin_bio_is_one_paragraph() {
        let p = Profile::builtin().unwrap();
        assert!(!p.bio.contains('\n'));
        assert!(p.bio.starts_with("Site Reliability Engineer with expertise"));
        assert!(p.bio.contains("scalable, resilient architectures"));
    }

    #[test]
    fn phone_has_no_url() {
        let p = Profile::builtin().unwrap();
        let phone = p.contact.iter().find(|c| c.label == "Phone").unwrap();
        assert!(phone.url.is_none());
    }

    #[test]
    fn minimal_document() {
        let p = Profile::from_toml_str("name = \"Ada\"\nhandle = \"ada\"").unwrap();
        assert_eq!(p.name, "Ada");
        assert!(p.projects.is_empty());
        assert!(p.resume.url.is_empty());
    }

    #[test]
    fn missing_name_rejected() {
        let err = Profile::from_toml_str("handle = \"ada\"").unwrap_err();
        assert!(matches!(err, FolioError::Profile(_)));
    }

    #[test]
    fn handle_with_space_rejected() {
        let err = Profile::from_toml_str("name = \"Ada\"\nhandle = \"ada l\"").unwrap_err();
        assert!(format!("{err}").contains("invalid handle"));
    }

    #[test]
    fn job_without_points() {
        let doc = r#"
name = "Ada"
handle = "ada"

[[experience]]
company = "Analytical Engines"
position = "Programmer"
duration = "1843"
"#;
        let p = Profile::from_toml_str(doc).unwrap();
        assert!(p.experience[0].points.is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "name = \"Grace\"\nhandle = \"grace\"").unwrap();
        drop(f);
        assert_eq!(Profile::load(&path).unwrap().handle, "grace");
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "name = [").unwrap();
        assert!(matches!(
            Profile::load(&path).unwrap_err(),
            FolioError::TomlParse(_)
        ));
    }
}

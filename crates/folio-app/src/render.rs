//! Plain-text rendering of transcript entries for the console host.

use folio_terminal::{Renderable, TranscriptEntry};

/// Column at which prose is wrapped.
pub const WRAP_WIDTH: usize = 88;

const INDENT: &str = "  ";

/// Render one transcript entry as console lines.
pub fn render_entry(entry: &TranscriptEntry) -> Vec<String> {
    let mut out = Vec::new();
    match entry {
        TranscriptEntry::CommandEcho {
            directory,
            raw_text,
        } => out.push(prompt_line(directory, raw_text)),
        TranscriptEntry::Output { content } => {
            render(content, 0, &mut out);
            // Blank separator between transcript rows.
            out.push(String::new());
        },
    }
    out
}

/// The prompt with optional typed text, e.g. `➜ ~ about`.
pub fn prompt_line(directory: &str, text: &str) -> String {
    if text.is_empty() {
        format!("➜ {directory} ")
    } else {
        format!("➜ {directory} {text}")
    }
}

fn render(r: &Renderable, depth: usize, out: &mut Vec<String>) {
    let pad = INDENT.repeat(depth);
    match r {
        Renderable::Text(text) => {
            let width = WRAP_WIDTH.saturating_sub(pad.len()).max(20);
            for line in wrap(text, width) {
                out.push(format!("{pad}{line}"));
            }
        },
        Renderable::List(items) => {
            for item in items {
                out.push(format!("{pad}› {item}"));
            }
        },
        Renderable::KeyValue(rows) => {
            let label_width = rows
                .iter()
                .map(|(k, _)| k.chars().count())
                .max()
                .unwrap_or(0);
            for (k, v) in rows {
                out.push(format!("{pad}{k:label_width$}  {v}"));
            }
        },
        Renderable::Link { label, url } => out.push(format!("{pad}{label}: {url}")),
        Renderable::Links(links) => {
            for (label, url) in links {
                out.push(format!("{pad}{label}: {url}"));
            }
        },
        Renderable::QuickLaunch(names) => {
            let buttons: Vec<String> = names.iter().map(|n| format!("[{n}]")).collect();
            out.push(format!("{pad}{}", buttons.join(" ")));
        },
        Renderable::Section { title, body } => {
            out.push(format!("{pad}{title}"));
            for child in body {
                render(child, depth + 1, out);
            }
        },
        Renderable::Group(children) => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(String::new());
                }
                render(child, depth, out);
            }
        },
        Renderable::Error(e) => out.push(format!("{pad}{e}")),
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_terminal::ShellError;

    #[test]
    fn echo_line() {
        let e = TranscriptEntry::CommandEcho {
            directory: "~".into(),
            raw_text: "about".into(),
        };
        assert_eq!(render_entry(&e), vec!["➜ ~ about"]);
    }

    #[test]
    fn empty_prompt_keeps_trailing_space() {
        assert_eq!(prompt_line("~", ""), "➜ ~ ");
    }

    #[test]
    fn output_ends_with_blank_line() {
        let e = TranscriptEntry::Output {
            content: Renderable::text("hi"),
        };
        assert_eq!(render_entry(&e), vec!["hi", ""]);
    }

    #[test]
    fn key_value_columns_align() {
        let mut out = Vec::new();
        render(
            &Renderable::KeyValue(vec![
                ("OS".into(), "Linux".into()),
                ("Location".into(), "India".into()),
            ]),
            0,
            &mut out,
        );
        assert_eq!(out, vec!["OS        Linux", "Location  India"]);
    }

    #[test]
    fn section_indents_body() {
        let mut out = Vec::new();
        render(
            &Renderable::section(
                "Recycler",
                vec![
                    Renderable::link("GitHub", "https://github.com/x"),
                    Renderable::List(vec!["one".into()]),
                ],
            ),
            0,
            &mut out,
        );
        assert_eq!(
            out,
            vec!["Recycler", "  GitHub: https://github.com/x", "  › one"]
        );
    }

    #[test]
    fn group_separates_children() {
        let mut out = Vec::new();
        render(
            &Renderable::Group(vec![Renderable::text("a"), Renderable::text("b")]),
            0,
            &mut out,
        );
        assert_eq!(out, vec!["a", "", "b"]);
    }

    #[test]
    fn quick_launch_buttons() {
        let mut out = Vec::new();
        render(
            &Renderable::QuickLaunch(vec!["about".into(), "skills".into()]),
            0,
            &mut out,
        );
        assert_eq!(out, vec!["[about] [skills]"]);
    }

    #[test]
    fn error_notice() {
        let mut out = Vec::new();
        render(
            &Renderable::Error(ShellError::UnknownCommand { name: "foo".into() }),
            0,
            &mut out,
        );
        assert_eq!(
            out,
            vec!["Command not found: foo. Type 'help' for available commands."]
        );
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("aa bb cc dd", 5), vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn wrap_long_word_alone() {
        assert_eq!(wrap("a verylongword b", 4), vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }
}

//! Content descriptions produced by commands.
//!
//! A `Renderable` says *what* to show, never *how*. Hosts walk the tree and
//! decide on colors, icons, and layout; the interpreter only stores it.

use crate::interpreter::ShellError;

/// Output content of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    /// A paragraph of prose.
    Text(String),
    /// Bulleted items.
    List(Vec<String>),
    /// Ordered label/value rows.
    KeyValue(Vec<(String, String)>),
    /// A single hyperlink.
    Link { label: String, url: String },
    /// A row of hyperlinks.
    Links(Vec<(String, String)>),
    /// Command names offered as one-click shortcuts.
    QuickLaunch(Vec<String>),
    /// A titled card with nested content.
    Section {
        title: String,
        body: Vec<Renderable>,
    },
    /// Content shown one after another.
    Group(Vec<Renderable>),
    /// A recovered shell error shown inline.
    Error(ShellError),
}

impl Renderable {
    pub fn text(text: impl Into<String>) -> Self {
        Renderable::Text(text.into())
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Renderable::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn section(title: impl Into<String>, body: Vec<Renderable>) -> Self {
        Renderable::Section {
            title: title.into(),
            body,
        }
    }

    /// The shell error carried by this content, if any.
    pub fn as_error(&self) -> Option<&ShellError> {
        match self {
            Renderable::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Concatenate all plain text in the tree, one fragment per line.
    ///
    /// Used by tests and by hosts that want a searchable transcript.
    pub fn plain_text(&self) -> String {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out.join("\n")
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Renderable::Text(s) => out.push(s.clone()),
            Renderable::List(items) | Renderable::QuickLaunch(items) => {
                out.extend(items.iter().cloned());
            },
            Renderable::KeyValue(rows) => {
                out.extend(rows.iter().map(|(k, v)| format!("{k}: {v}")));
            },
            Renderable::Link { label, url } => out.push(format!("{label} <{url}>")),
            Renderable::Links(links) => {
                out.extend(links.iter().map(|(label, url)| format!("{label} <{url}>")));
            },
            Renderable::Section { title, body } => {
                out.push(title.clone());
                for child in body {
                    child.collect_text(out);
                }
            },
            Renderable::Group(children) => {
                for child in children {
                    child.collect_text(out);
                }
            },
            Renderable::Error(e) => out.push(e.to_string()),
        }
    }
}

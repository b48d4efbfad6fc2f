//! Output records produced by the dispatcher.

use serde::{Deserialize, Serialize};

/// Category of an output entry. The presentation layer styles by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Navigation and editor commands (green)
    Success,
    /// Failed commands (red)
    Error,
    /// Informational listings (yellow)
    Info,
    /// Easter eggs (glow)
    Special,
    /// Filesystem and plain shell output
    System,
}

/// A labelled hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Renderable body of an output entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    /// Plain text, may span lines
    Text(String),
    /// Key/value rows
    Table(Vec<(String, String)>),
    /// One item per row
    List(Vec<String>),
    /// Preformatted art
    Ascii(String),
    /// Hyperlinks
    Links(Vec<Link>),
}

impl Payload {
    /// Plain-text rendering, one row per line.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Text(s) | Self::Ascii(s) => s.clone(),
            Self::Table(rows) => rows
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::List(items) => items.join("\n"),
            Self::Links(links) => links
                .iter()
                .map(|l| format!("{}: {}", l.label, l.url))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Output of one command before it is recorded in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub kind: OutputKind,
    pub payload: Payload,
}

impl Output {
    pub fn new(kind: OutputKind, payload: impl Into<Payload>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn success(payload: impl Into<Payload>) -> Self {
        Self::new(OutputKind::Success, payload)
    }

    pub fn error(payload: impl Into<Payload>) -> Self {
        Self::new(OutputKind::Error, payload)
    }

    pub fn info(payload: impl Into<Payload>) -> Self {
        Self::new(OutputKind::Info, payload)
    }

    pub fn special(payload: impl Into<Payload>) -> Self {
        Self::new(OutputKind::Special, payload)
    }

    pub fn system(payload: impl Into<Payload>) -> Self {
        Self::new(OutputKind::System, payload)
    }
}

/// A recorded output with a session-unique ID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputEntry {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    pub kind: OutputKind,
    pub payload: Payload,
}

impl OutputEntry {
    pub(crate) fn new(id: usize, output: Output) -> Self {
        Self {
            id,
            kind: output.kind,
            payload: output.payload,
        }
    }
}

impl PartialEq for OutputEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.kind == other.kind && self.payload == other.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Output::success("ok").kind, OutputKind::Success);
        assert_eq!(Output::error("no").kind, OutputKind::Error);
        assert_eq!(Output::info("i").kind, OutputKind::Info);
        assert_eq!(Output::special("*").kind, OutputKind::Special);
        assert_eq!(
            Output::system("pwd").payload,
            Payload::Text("pwd".to_string())
        );
    }

    #[test]
    fn test_entry_equality_ignores_id() {
        let a = OutputEntry::new(1, Output::info("same"));
        let b = OutputEntry::new(2, Output::info("same"));
        assert_eq!(a, b);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_plain_text() {
        let table = Payload::Table(vec![
            ("NAME".into(), "cat".into()),
            ("SYNOPSIS".into(), "cat <file>".into()),
        ]);
        assert_eq!(table.to_plain_text(), "NAME: cat\nSYNOPSIS: cat <file>");

        let links = Payload::Links(vec![Link::new("GitHub", "https://github.com")]);
        assert_eq!(links.to_plain_text(), "GitHub: https://github.com");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Output::error("boom")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["payload"]["type"], "text");
        assert_eq!(json["payload"]["data"], "boom");
    }
}

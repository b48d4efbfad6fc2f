//! Command parsing and execution.
//!
//! This module provides:
//! - `Command`, the parsed form of one input line
//! - `execute_command`, which evaluates a command against the session
//! - `CommandResult` and `Effect`, what execution hands back
//!
//! # Architecture
//!
//! Parsing is pure: [`Command::parse`] turns a raw line into a `Command`
//! without touching any state. Execution is pure as well; it reads the
//! session and returns the output plus at most one [`Effect`], which the
//! [`Shell`](crate::Shell) applies.

mod execute;
pub mod manual;
mod result;

pub use execute::{Context, execute_command};
pub use result::{CommandResult, Effect};

use std::fmt;

use crate::models::Section;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// Stored as typed; validation happens during execution against the
/// virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Verbs that open the editor overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Editor {
    Edit,
    Nano,
    Vim,
}

impl Editor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Nano => "nano",
            Self::Vim => "vim",
        }
    }
}

/// Read-only commands derived from session and history state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoCommand {
    Help,
    Social,
    Whoami,
    Date,
    History,
    Pwd,
}

/// Commands against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsCommand {
    Ls(Option<PathArg>),
    Cd(Option<PathArg>),
    Cat(Option<PathArg>),
}

/// Easter eggs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decorative {
    Coffee,
    Joke,
    LaunchPortfolio,
    Portfolio3d,
    Exit,
}

/// Parsed terminal command, one variant per command class.
///
/// Classes are matched in declaration order; the first match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Navigate(Section),
    Edit {
        editor: Editor,
        file: Option<String>,
    },
    Info(InfoCommand),
    Fs(FsCommand),
    /// Rest of the line after the verb, case preserved
    Echo(String),
    Man(Option<String>),
    Decorative(Decorative),
    /// Verb as typed
    Unknown(String),
}

impl Command {
    /// All recognized verbs, in vocabulary order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        manual::MANUAL.iter().map(|m| m.name)
    }

    /// Parse a raw input line.
    ///
    /// Only the verb is lower-cased. Arguments keep their original casing,
    /// and `echo` receives the remainder of the line verbatim.
    pub fn parse(input: &str) -> Self {
        let line = input.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };
        let first_arg = rest.split_whitespace().next();

        let verb_lower = verb.to_lowercase();
        if verb_lower == "clear" {
            return Self::Clear;
        }
        if let Some(section) = Section::from_name(&verb_lower) {
            return Self::Navigate(section);
        }

        match verb_lower.as_str() {
            "edit" | "nano" | "vim" => Self::Edit {
                editor: match verb_lower.as_str() {
                    "nano" => Editor::Nano,
                    "vim" => Editor::Vim,
                    _ => Editor::Edit,
                },
                file: first_arg.map(str::to_string),
            },
            "help" => Self::Info(InfoCommand::Help),
            "social" => Self::Info(InfoCommand::Social),
            "whoami" => Self::Info(InfoCommand::Whoami),
            "date" => Self::Info(InfoCommand::Date),
            "history" => Self::Info(InfoCommand::History),
            "pwd" => Self::Info(InfoCommand::Pwd),
            "ls" => Self::Fs(FsCommand::Ls(first_arg.map(PathArg::from))),
            "cd" => Self::Fs(FsCommand::Cd(first_arg.map(PathArg::from))),
            "cat" => Self::Fs(FsCommand::Cat(first_arg.map(PathArg::from))),
            "echo" => Self::Echo(rest.to_string()),
            "man" => Self::Man(first_arg.map(str::to_string)),
            "coffee" => Self::Decorative(Decorative::Coffee),
            "joke" => Self::Decorative(Decorative::Joke),
            "launch_portfolio" => Self::Decorative(Decorative::LaunchPortfolio),
            "3d_portfolio" => Self::Decorative(Decorative::Portfolio3d),
            "exit" => Self::Decorative(Decorative::Exit),
            _ => Self::Unknown(verb.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clear() {
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("  CLEAR  "), Command::Clear);
    }

    #[test]
    fn test_parse_sections() {
        for section in Section::ALL {
            assert_eq!(Command::parse(section.name()), Command::Navigate(section));
        }
        assert_eq!(Command::parse("About"), Command::Navigate(Section::About));
    }

    #[test]
    fn test_parse_editors() {
        assert_eq!(
            Command::parse("vim About.md"),
            Command::Edit {
                editor: Editor::Vim,
                file: Some("About.md".to_string())
            }
        );
        assert_eq!(
            Command::parse("nano"),
            Command::Edit {
                editor: Editor::Nano,
                file: None
            }
        );
        assert!(matches!(
            Command::parse("EDIT home.sh"),
            Command::Edit { editor: Editor::Edit, file: Some(ref f) } if f == "home.sh"
        ));
    }

    #[test]
    fn test_parse_info() {
        assert_eq!(Command::parse("help"), Command::Info(InfoCommand::Help));
        assert_eq!(Command::parse("social"), Command::Info(InfoCommand::Social));
        assert_eq!(Command::parse("WhoAmI"), Command::Info(InfoCommand::Whoami));
        assert_eq!(Command::parse("date"), Command::Info(InfoCommand::Date));
        assert_eq!(Command::parse("history"), Command::Info(InfoCommand::History));
        assert_eq!(Command::parse("pwd"), Command::Info(InfoCommand::Pwd));
    }

    #[test]
    fn test_parse_fs() {
        assert_eq!(Command::parse("ls"), Command::Fs(FsCommand::Ls(None)));
        assert!(matches!(
            Command::parse("ls projects"),
            Command::Fs(FsCommand::Ls(Some(ref p))) if p == &"projects"
        ));
        assert!(matches!(
            Command::parse("cd .."),
            Command::Fs(FsCommand::Cd(Some(ref p))) if p == &".."
        ));
        assert_eq!(Command::parse("cd"), Command::Fs(FsCommand::Cd(None)));
        assert!(matches!(
            Command::parse("CAT About.txt"),
            Command::Fs(FsCommand::Cat(Some(ref p))) if p == &"About.txt"
        ));
    }

    #[test]
    fn test_parse_echo_preserves_text() {
        assert_eq!(
            Command::parse("ECHO Hello   World"),
            Command::Echo("Hello   World".to_string())
        );
        assert_eq!(Command::parse("echo"), Command::Echo(String::new()));
    }

    #[test]
    fn test_parse_man() {
        assert_eq!(Command::parse("man cat"), Command::Man(Some("cat".into())));
        assert_eq!(Command::parse("man"), Command::Man(None));
    }

    #[test]
    fn test_parse_decorative() {
        assert_eq!(Command::parse("coffee"), Command::Decorative(Decorative::Coffee));
        assert_eq!(Command::parse("joke"), Command::Decorative(Decorative::Joke));
        assert_eq!(
            Command::parse("launch_portfolio"),
            Command::Decorative(Decorative::LaunchPortfolio)
        );
        assert_eq!(
            Command::parse("3d_portfolio"),
            Command::Decorative(Decorative::Portfolio3d)
        );
        assert_eq!(Command::parse("exit"), Command::Decorative(Decorative::Exit));
    }

    #[test]
    fn test_parse_unknown_keeps_casing() {
        assert_eq!(
            Command::parse("Frobnicate --now"),
            Command::Unknown("Frobnicate".to_string())
        );
    }

    #[test]
    fn test_names_cover_parser() {
        for name in Command::names() {
            assert!(
                !matches!(Command::parse(name), Command::Unknown(_)),
                "{} should parse",
                name
            );
        }
    }
}

//! Error types for the shell.
//!
//! Every variant except [`ShellError::Busy`] and [`ShellError::EmptyInput`]
//! is recovered inside the dispatcher and rendered as a single `error`
//! output entry. Those two are rejections of the submission itself and
//! never reach the history.

use thiserror::Error;

/// Errors raised while dispatching a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Verb not in the vocabulary.
    #[error("command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    /// File target does not exist.
    #[error("{command}: {target}: No such file")]
    UnknownFile { command: String, target: String },

    /// Directory target does not exist.
    #[error("{command}: {target}: No such file or directory")]
    UnknownDirectory { command: String, target: String },

    /// Target exists but is a file where a directory is required.
    #[error("{command}: {target}: Not a directory")]
    NotADirectory { command: String, target: String },

    /// Target exists but is a directory where a file is required.
    #[error("{command}: {target}: Is a directory")]
    IsADirectory { command: String, target: String },

    /// Required operand was not supplied.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },

    /// `man` was asked about an unrecognized verb.
    #[error("No manual entry for {0}")]
    NoManualEntry(String),

    /// Name does not map to a section.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// A command is still being processed.
    #[error("a command is already running")]
    Busy,

    /// Submission was blank.
    #[error("nothing to run")]
    EmptyInput,
}

impl ShellError {
    pub(crate) fn unknown_file(command: &str, target: &str) -> Self {
        Self::UnknownFile {
            command: command.to_string(),
            target: target.to_string(),
        }
    }

    pub(crate) fn unknown_directory(command: &str, target: &str) -> Self {
        Self::UnknownDirectory {
            command: command.to_string(),
            target: target.to_string(),
        }
    }

    pub(crate) fn not_a_directory(command: &str, target: &str) -> Self {
        Self::NotADirectory {
            command: command.to_string(),
            target: target.to_string(),
        }
    }

    pub(crate) fn is_a_directory(command: &str, target: &str) -> Self {
        Self::IsADirectory {
            command: command.to_string(),
            target: target.to_string(),
        }
    }

    pub(crate) fn missing(command: &str, argument: &'static str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
            argument,
        }
    }

    /// Whether the error rejects the submission rather than the command.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Busy | Self::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::UnknownCommand("frobnicate".into()).to_string(),
            "command not found: frobnicate. Type 'help' for available commands."
        );
        assert_eq!(
            ShellError::missing("edit", "file operand").to_string(),
            "edit: missing file operand"
        );
        assert_eq!(
            ShellError::NoManualEntry("xyz".into()).to_string(),
            "No manual entry for xyz"
        );
    }

    #[test]
    fn test_rejections() {
        assert!(ShellError::Busy.is_rejection());
        assert!(ShellError::EmptyInput.is_rejection());
        assert!(!ShellError::UnknownCommand("x".into()).is_rejection());
    }
}

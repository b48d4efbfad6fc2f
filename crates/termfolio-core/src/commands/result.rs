//! Command execution result type.

use crate::models::{Output, Section};

/// A state change requested by a command.
///
/// Commands never mutate the session themselves; the shell applies the
/// effect after execution and hands it to the presentation as a
/// notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Empty both history logs
    ClearHistory,
    /// Move the working directory to an absolute path
    ChangeDir(String),
    /// Switch the active section
    Navigate(Section),
    /// Open the editor overlay on a section file
    OpenEditor(Section),
    /// Start the `launch_portfolio` tour
    StartTour,
}

/// Result of executing a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output to record. Only `clear` has none.
    pub output: Option<Output>,
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output, no effect.
    pub fn output(output: Output) -> Self {
        Self {
            output: Some(output),
            effect: None,
        }
    }

    /// Create a result with output and an effect.
    pub fn with_effect(output: Output, effect: Effect) -> Self {
        Self {
            output: Some(output),
            effect: Some(effect),
        }
    }

    /// Create a result with an effect and nothing to record.
    pub fn silent(effect: Effect) -> Self {
        Self {
            output: None,
            effect: Some(effect),
        }
    }
}

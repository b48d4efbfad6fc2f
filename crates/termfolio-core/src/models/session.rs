//! The mutable session aggregate.

use serde::{Deserialize, Serialize};

use super::Section;
use crate::config::DEFAULT_THEME;

/// Root of the virtual filesystem.
pub const ROOT_PATH: &str = "/";

/// Whether the editor overlay is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    /// Only the terminal is visible
    #[default]
    TerminalOnly,
    /// Editor overlay bound to a section file
    EditorOverlay {
        section: Section,
        file_name: String,
        /// Content is still loading
        loading: bool,
    },
}

impl Mode {
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::EditorOverlay { .. })
    }
}

/// State shared by the dispatcher and the mode machine.
///
/// Fields are only mutated inside the crate, which keeps the working
/// directory pointing at an existing directory and the mode consistent
/// with the active section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) cwd: String,
    pub(crate) section: Section,
    pub(crate) mode: Mode,
    pub(crate) shell_visible: bool,
    pub(crate) theme: String,
    pub(crate) processing: bool,
}

impl Session {
    /// Creates a session at the filesystem root, on the home section,
    /// with the shell visible and no overlay.
    pub fn new() -> Self {
        Self {
            cwd: ROOT_PATH.to_string(),
            section: Section::default(),
            mode: Mode::default(),
            shell_visible: true,
            theme: DEFAULT_THEME.to_string(),
            processing: false,
        }
    }

    /// Working directory as an absolute path.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// `true` in shell mode, `false` in direct section view.
    pub fn shell_visible(&self) -> bool {
        self.shell_visible
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Replace the theme identifier. The core never interprets it.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    /// A command's output is pending.
    pub fn processing(&self) -> bool {
        self.processing
    }

    /// Working directory as shown in the prompt (`~` for root).
    pub fn display_path(&self) -> String {
        if self.cwd == ROOT_PATH {
            "~".to_string()
        } else {
            format!("~{}", self.cwd)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        assert_eq!(session.cwd(), "/");
        assert_eq!(session.section(), Section::Home);
        assert_eq!(session.mode(), &Mode::TerminalOnly);
        assert!(session.shell_visible());
        assert!(!session.processing());
        assert_eq!(session.theme(), DEFAULT_THEME);
    }

    #[test]
    fn test_display_path() {
        let mut session = Session::new();
        assert_eq!(session.display_path(), "~");
        session.cwd = "/projects".to_string();
        assert_eq!(session.display_path(), "~/projects");
    }

    #[test]
    fn test_snapshot_json() {
        let json = serde_json::to_value(Session::new()).unwrap();
        assert_eq!(json["section"], "home");
        assert_eq!(json["mode"]["mode"], "terminal_only");
    }
}

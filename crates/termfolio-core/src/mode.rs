//! Section and editor overlay transitions.
//!
//! ```text
//!                navigate / edit / open file
//!   TerminalOnly ---------------------------> EditorOverlay(section, file)
//!        ^                                          |
//!        +------- close / Escape / save and exit ---+
//! ```
//!
//! Orthogonal to the mode, `shell_visible` switches between the shell and
//! the direct section view. Leaving the shell drops the overlay; coming
//! back reopens it on the last active section.

use log::info;

use crate::error::ShellError;
use crate::models::{Mode, Section, Session};

impl Session {
    /// Make `section` active. The overlay only opens while the shell is
    /// visible; in the direct view the section is shown as is.
    pub(crate) fn navigate(&mut self, section: Section) {
        self.section = section;
        if self.shell_visible {
            self.open_editor(section);
        }
    }

    /// Enter the overlay bound to `section`'s file, with content loading.
    pub(crate) fn open_editor(&mut self, section: Section) {
        self.section = section;
        self.mode = Mode::EditorOverlay {
            section,
            file_name: section.file_name().to_string(),
            loading: true,
        };
        info!("editor opened on {}", section.file_name());
    }

    /// Open the overlay from a file name, as clicked in the presentation.
    pub(crate) fn open_file(&mut self, file_name: &str) -> Result<Section, ShellError> {
        let section = Section::from_file_name(file_name)
            .ok_or_else(|| ShellError::unknown_file("open", file_name))?;
        self.open_editor(section);
        Ok(section)
    }

    /// Back to the plain terminal. Returns whether an overlay was open.
    pub(crate) fn close_editor(&mut self) -> bool {
        if !self.mode.is_overlay() {
            return false;
        }
        self.mode = Mode::TerminalOnly;
        info!("editor closed");
        true
    }

    /// Overlay content has finished loading.
    pub(crate) fn finish_loading(&mut self) {
        if let Mode::EditorOverlay { loading, .. } = &mut self.mode {
            *loading = false;
        }
    }

    /// Flip between shell and direct section view. Returns the new flag.
    pub(crate) fn toggle_shell_view(&mut self) -> bool {
        self.shell_visible = !self.shell_visible;
        if self.shell_visible {
            self.open_editor(self.section);
        } else {
            self.mode = Mode::TerminalOnly;
        }
        info!("shell visible: {}", self.shell_visible);
        self.shell_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(section: Section, loading: bool) -> Mode {
        Mode::EditorOverlay {
            section,
            file_name: section.file_name().to_string(),
            loading,
        }
    }

    #[test]
    fn test_navigate_opens_overlay_in_shell() {
        let mut session = Session::new();
        session.navigate(Section::Skills);
        assert_eq!(session.section(), Section::Skills);
        assert_eq!(session.mode(), &overlay(Section::Skills, true));
    }

    #[test]
    fn test_navigate_in_direct_view() {
        let mut session = Session::new();
        session.toggle_shell_view();
        session.navigate(Section::Blog);
        assert_eq!(session.section(), Section::Blog);
        assert_eq!(session.mode(), &Mode::TerminalOnly);
    }

    #[test]
    fn test_open_file() {
        let mut session = Session::new();
        assert_eq!(session.open_file("Contact.HTML"), Ok(Section::Contact));
        assert_eq!(session.mode(), &overlay(Section::Contact, true));

        let err = session.open_file("resume.pdf").unwrap_err();
        assert_eq!(err, ShellError::unknown_file("open", "resume.pdf"));
        assert_eq!(session.section(), Section::Contact);
    }

    #[test]
    fn test_close_and_finish_loading() {
        let mut session = Session::new();
        assert!(!session.close_editor());

        session.open_editor(Section::About);
        session.finish_loading();
        assert_eq!(session.mode(), &overlay(Section::About, false));

        assert!(session.close_editor());
        assert_eq!(session.mode(), &Mode::TerminalOnly);
        assert_eq!(session.section(), Section::About);

        session.finish_loading();
        assert_eq!(session.mode(), &Mode::TerminalOnly);
    }

    #[test]
    fn test_toggle_keeps_section() {
        let mut session = Session::new();
        session.navigate(Section::Projects);

        assert!(!session.toggle_shell_view());
        assert_eq!(session.mode(), &Mode::TerminalOnly);
        session.navigate(Section::Files);

        assert!(session.toggle_shell_view());
        assert_eq!(session.mode(), &overlay(Section::Files, true));
    }
}

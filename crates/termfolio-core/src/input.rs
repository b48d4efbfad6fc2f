//! Line buffer and key routing for the prompt.
//!
//! The handler never rejects input. It edits its own buffer, the recall
//! cursor and the suggestion pane, and reports the few keys that need the
//! rest of the shell as an [`InputAction`].

use log::debug;

use crate::autocomplete::Suggestions;
use crate::history::History;

/// Keys the prompt reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Escape,
    /// Discard the buffer
    CtrlC,
    /// Clear the screen
    CtrlL,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_event(key: &str, ctrl: bool) -> Self {
        match (key, ctrl) {
            ("c" | "C", true) => Self::CtrlC,
            ("l" | "L", true) => Self::CtrlL,
            ("Enter", _) => Self::Enter,
            ("ArrowUp", _) => Self::ArrowUp,
            ("ArrowDown", _) => Self::ArrowDown,
            ("ArrowLeft", _) => Self::ArrowLeft,
            ("ArrowRight", _) => Self::ArrowRight,
            ("Tab", _) => Self::Tab,
            ("Escape", _) => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Whether the browser default should be suppressed for this key.
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// What the shell has to do after a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Run this line
    Submit(String),
    /// Escape with no suggestion pane open
    CloseOverlay,
}

#[derive(Clone, Debug, Default)]
pub struct InputHandler {
    buffer: String,
    /// Offset from the newest command. `None` is the live buffer.
    recall: Option<usize>,
    suggestions: Suggestions,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn recall_cursor(&self) -> Option<usize> {
        self.recall
    }

    pub fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    /// Replace the buffer after a text change and recompute suggestions.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.suggestions.update(&self.buffer);
    }

    /// Route one key.
    pub fn handle_key(&mut self, key: Key, history: &History) -> Option<InputAction> {
        debug!("key {:?}", key);

        match key {
            Key::Enter => self.take_line().map(InputAction::Submit),
            Key::ArrowUp => {
                self.recall_older(history);
                None
            }
            Key::ArrowDown => {
                self.recall_newer(history);
                None
            }
            Key::ArrowLeft => {
                self.suggestions.cycle(-1);
                None
            }
            Key::ArrowRight => {
                self.suggestions.cycle(1);
                None
            }
            Key::Tab => {
                self.tab();
                None
            }
            Key::Escape => {
                if self.suggestions.is_visible() {
                    self.suggestions.hide();
                    None
                } else {
                    Some(InputAction::CloseOverlay)
                }
            }
            Key::CtrlC => {
                self.reset();
                None
            }
            Key::CtrlL => {
                self.recall = None;
                self.suggestions.hide();
                Some(InputAction::Submit("clear".to_string()))
            }
            Key::Other => None,
        }
    }

    /// Take a non-blank buffer for submission and reset the prompt.
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.buffer);
        self.reset();
        Some(line)
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.recall = None;
        self.suggestions.reset();
    }

    fn recall_older(&mut self, history: &History) {
        if history.is_empty() {
            return;
        }
        let offset = self
            .recall
            .map_or(0, |i| i + 1)
            .min(history.len() - 1);
        self.load(offset, history);
    }

    fn recall_newer(&mut self, history: &History) {
        match self.recall {
            None => {}
            Some(0) => {
                self.recall = None;
                self.set_buffer(String::new());
            }
            Some(i) => self.load(i - 1, history),
        }
    }

    fn load(&mut self, offset: usize, history: &History) {
        if let Some(raw) = history.recall(offset) {
            self.recall = Some(offset);
            self.set_buffer(raw);
            self.suggestions.hide();
        }
    }

    fn tab(&mut self) {
        if self.suggestions.is_visible() {
            if let Some(candidate) = self.suggestions.active().map(str::to_string) {
                self.set_buffer(candidate);
            }
            self.suggestions.hide();
        } else {
            self.suggestions.update(&self.buffer);
            self.suggestions.open();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Output;

    fn history(lines: &[&str]) -> History {
        let mut history = History::new();
        for line in lines {
            history.record(*line, Output::system(""));
        }
        history
    }

    #[test]
    fn test_from_event() {
        assert_eq!(Key::from_event("Enter", false), Key::Enter);
        assert_eq!(Key::from_event("l", true), Key::CtrlL);
        assert_eq!(Key::from_event("c", true), Key::CtrlC);
        assert_eq!(Key::from_event("c", false), Key::Other);
        assert!(!Key::Other.is_handled());
    }

    #[test]
    fn test_enter_submits_and_resets() {
        let mut input = InputHandler::new();
        input.set_buffer("Echo Hi");
        let action = input.handle_key(Key::Enter, &History::new());
        assert_eq!(action, Some(InputAction::Submit("Echo Hi".to_string())));
        assert_eq!(input.buffer(), "");
        assert_eq!(input.recall_cursor(), None);
        assert!(input.suggestions().candidates().is_empty());
    }

    #[test]
    fn test_enter_on_blank_buffer() {
        let mut input = InputHandler::new();
        input.set_buffer("   ");
        assert_eq!(input.handle_key(Key::Enter, &History::new()), None);
    }

    #[test]
    fn test_arrow_up_empty_history_is_noop() {
        let mut input = InputHandler::new();
        input.set_buffer("draft");
        input.handle_key(Key::ArrowUp, &History::new());
        assert_eq!(input.buffer(), "draft");
        assert_eq!(input.recall_cursor(), None);
    }

    #[test]
    fn test_recall_walks_and_clamps() {
        let history = history(&["help", "ls", "pwd"]);
        let mut input = InputHandler::new();

        input.handle_key(Key::ArrowUp, &history);
        assert_eq!(input.buffer(), "pwd");
        input.handle_key(Key::ArrowUp, &history);
        input.handle_key(Key::ArrowUp, &history);
        input.handle_key(Key::ArrowUp, &history);
        assert_eq!(input.buffer(), "help");
        assert_eq!(input.recall_cursor(), Some(2));

        input.handle_key(Key::ArrowDown, &history);
        assert_eq!(input.buffer(), "ls");
        input.handle_key(Key::ArrowDown, &history);
        assert_eq!(input.recall_cursor(), Some(0));
        input.handle_key(Key::ArrowDown, &history);
        assert_eq!(input.recall_cursor(), None);
        assert_eq!(input.buffer(), "");

        input.handle_key(Key::ArrowDown, &history);
        assert_eq!(input.recall_cursor(), None);
    }

    #[test]
    fn test_recall_hides_suggestions() {
        let history = history(&["clear"]);
        let mut input = InputHandler::new();
        input.set_buffer("c");
        input.handle_key(Key::Tab, &history);
        assert!(input.suggestions().is_visible());

        input.handle_key(Key::ArrowUp, &history);
        assert!(!input.suggestions().is_visible());
    }

    #[test]
    fn test_tab_opens_then_accepts() {
        let history = History::new();
        let mut input = InputHandler::new();
        input.set_buffer("co");
        input.handle_key(Key::Tab, &history);
        assert!(input.suggestions().is_visible());
        assert_eq!(input.suggestions().candidates(), ["contact", "coffee"]);

        input.handle_key(Key::ArrowRight, &history);
        input.handle_key(Key::Tab, &history);
        assert_eq!(input.buffer(), "coffee");
        assert!(!input.suggestions().is_visible());
    }

    #[test]
    fn test_tab_without_candidates_is_noop() {
        let history = History::new();
        let mut input = InputHandler::new();
        input.handle_key(Key::Tab, &history);
        assert!(!input.suggestions().is_visible());
        assert!(input.suggestions().candidates().is_empty());

        input.set_buffer("zz");
        input.handle_key(Key::Tab, &history);
        input.handle_key(Key::Tab, &history);
        assert_eq!(input.buffer(), "zz");
        assert!(!input.suggestions().is_visible());
    }

    #[test]
    fn test_escape() {
        let history = History::new();
        let mut input = InputHandler::new();
        input.set_buffer("h");
        input.handle_key(Key::Tab, &history);

        assert_eq!(input.handle_key(Key::Escape, &history), None);
        assert!(!input.suggestions().is_visible());
        assert_eq!(input.buffer(), "h");

        assert_eq!(
            input.handle_key(Key::Escape, &history),
            Some(InputAction::CloseOverlay)
        );
    }

    #[test]
    fn test_ctrl_keys() {
        let history = History::new();
        let mut input = InputHandler::new();
        input.set_buffer("half typed");
        assert_eq!(
            input.handle_key(Key::CtrlL, &history),
            Some(InputAction::Submit("clear".to_string()))
        );
        assert_eq!(input.buffer(), "half typed");

        input.handle_key(Key::CtrlC, &history);
        assert_eq!(input.buffer(), "");
    }
}

//! Command-name suggestions for the input line.
//!
//! Suggestions only ever complete the verb. The vocabulary is the static
//! list behind [`Command::names`], so candidates keep its order.

use crate::commands::Command;

/// Vocabulary entries matching the buffer, case-insensitively, by prefix.
///
/// An empty (or all-whitespace) buffer has no candidates.
pub fn suggest(input: &str) -> Vec<String> {
    let prefix = input.trim_start().to_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }

    Command::names()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .map(str::to_string)
        .collect()
}

/// Suggestion pane state, derived from the buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestions {
    candidates: Vec<String>,
    active: usize,
    visible: bool,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Index of the highlighted candidate.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The highlighted candidate, if any.
    pub fn active(&self) -> Option<&str> {
        self.candidates.get(self.active).map(String::as_str)
    }

    /// Recompute candidates for a new buffer. The highlight goes back to
    /// the first candidate and an open pane closes once nothing matches.
    pub fn update(&mut self, input: &str) {
        self.candidates = suggest(input);
        self.active = 0;
        if self.candidates.is_empty() {
            self.visible = false;
        }
    }

    /// Open the pane. Returns `false` when there is nothing to show.
    pub fn open(&mut self) -> bool {
        self.visible = !self.candidates.is_empty();
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Drop everything, as after a submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move the highlight by `step`, wrapping around. No-op while hidden.
    pub fn cycle(&mut self, step: isize) {
        let n = self.candidates.len();
        if !self.visible || n == 0 {
            return;
        }
        self.active = (self.active as isize + step).rem_euclid(n as isize) as usize;
    }
}

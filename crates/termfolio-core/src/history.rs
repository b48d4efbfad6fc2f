//! Command and output history.
//!
//! Two parallel append-only logs. Entry `i` of the command log produced
//! entry `i` of the output log, and both grow in the same call, so their
//! lengths are always equal. Only [`History::clear`] removes anything.

use crate::config::COMPACT_VIEW_LEN;
use crate::models::{Output, OutputEntry};

/// A submitted command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEntry {
    /// Position in the log when it was recorded
    pub index: usize,
    /// Raw text as typed
    pub raw: String,
}

/// What the presentation should render.
#[derive(Debug, PartialEq)]
pub struct HistoryView<'a> {
    /// Number of older pairs left out of `entries`
    pub hidden: usize,
    pub entries: Vec<(&'a CommandEntry, &'a OutputEntry)>,
}

#[derive(Clone, Debug, Default)]
pub struct History {
    commands: Vec<CommandEntry>,
    outputs: Vec<OutputEntry>,
    /// Next output ID. Not reset by `clear`.
    next_id: usize,
    compact: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command together with its output.
    pub fn record(&mut self, raw: impl Into<String>, output: Output) -> &OutputEntry {
        let index = self.commands.len();
        self.commands.push(CommandEntry {
            index,
            raw: raw.into(),
        });
        self.outputs.push(OutputEntry::new(self.next_id, output));
        self.next_id += 1;

        debug_assert_eq!(self.commands.len(), self.outputs.len());
        &self.outputs[index]
    }

    /// Empty both logs.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.outputs.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn outputs(&self) -> &[OutputEntry] {
        &self.outputs
    }

    /// Command text `offset` entries back from the newest (0 = newest).
    pub fn recall(&self, offset: usize) -> Option<&str> {
        let len = self.commands.len();
        if offset >= len {
            return None;
        }
        Some(self.commands[len - 1 - offset].raw.as_str())
    }

    /// Rows for the `history` command: 1-based ordinal and command text.
    pub fn numbered(&self) -> Vec<(String, String)> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, entry)| ((i + 1).to_string(), entry.raw.clone()))
            .collect()
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn toggle_compact(&mut self) -> bool {
        self.compact = !self.compact;
        self.compact
    }

    /// Pairs to display. The compact view keeps only the newest
    /// [`COMPACT_VIEW_LEN`] pairs and reports how many were hidden.
    pub fn view(&self) -> HistoryView<'_> {
        let skip = if self.compact {
            self.len().saturating_sub(COMPACT_VIEW_LEN)
        } else {
            0
        };

        HistoryView {
            hidden: skip,
            entries: self
                .commands
                .iter()
                .zip(self.outputs.iter())
                .skip(skip)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> History {
        let mut history = History::new();
        for i in 0..n {
            history.record(format!("cmd{}", i), Output::system(format!("out{}", i)));
        }
        history
    }

    #[test]
    fn test_record_keeps_logs_aligned() {
        let mut history = History::new();
        let entry = history.record("help", Output::info("..."));
        assert_eq!(entry.id, 0);
        assert_eq!(history.len(), 1);
        assert_eq!(history.outputs().len(), 1);
        assert_eq!(history.commands()[0].index, 0);
    }

    #[test]
    fn test_clear_keeps_ids_unique() {
        let mut history = filled(2);
        history.clear();
        assert!(history.is_empty());
        assert!(history.outputs().is_empty());

        let entry = history.record("pwd", Output::system("/"));
        assert_eq!(entry.id, 2);
        assert_eq!(history.commands()[0].index, 0);
    }

    #[test]
    fn test_recall_from_newest() {
        let history = filled(3);
        assert_eq!(history.recall(0), Some("cmd2"));
        assert_eq!(history.recall(2), Some("cmd0"));
        assert_eq!(history.recall(3), None);
        assert_eq!(History::new().recall(0), None);
    }

    #[test]
    fn test_numbered_is_one_based() {
        let history = filled(2);
        assert_eq!(
            history.numbered(),
            vec![
                ("1".to_string(), "cmd0".to_string()),
                ("2".to_string(), "cmd1".to_string()),
            ]
        );
    }

    #[test]
    fn test_compact_view_hides_without_deleting() {
        let mut history = filled(5);
        history.set_compact(true);

        let view = history.view();
        assert_eq!(view.hidden, 2);
        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.entries[0].0.raw, "cmd2");
        assert_eq!(history.len(), 5);

        assert!(!history.toggle_compact());
        let view = history.view();
        assert_eq!(view.hidden, 0);
        assert_eq!(view.entries.len(), 5);
    }

    #[test]
    fn test_compact_view_short_history() {
        let mut history = filled(2);
        history.set_compact(true);
        let view = history.view();
        assert_eq!(view.hidden, 0);
        assert_eq!(view.entries.len(), 2);
    }
}

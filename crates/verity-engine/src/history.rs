use std::collections::VecDeque;

use verity_core::{AnalysisResult, HistoryEntry};

/// Session history, most recent first.
///
/// Ids start at 1 and keep increasing across [`History::clear`], so an id is
/// never reused within one process.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
        }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `result` under a fresh id and return the stored entry.
    pub fn push(&mut self, result: AnalysisResult, source: Option<String>) -> HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            result,
            source,
        };
        self.next_id += 1;
        self.entries.push_front(entry.clone());
        entry
    }

    /// Snapshot of all entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Append-only log of a round's guesses

use crate::core::{Pattern, Word};

/// One played guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Ordered guesses of the current round
///
/// Entries can only be appended; there is no way to edit or remove one.
#[derive(Debug, Clone, Default)]
pub struct RoundHistory {
    entries: Vec<HistoryEntry>,
}

impl RoundHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess and its feedback at the end of the log
    pub fn append(&mut self, guess: Word, pattern: Pattern) {
        self.entries.push(HistoryEntry { guess, pattern });
    }

    /// All entries in the order they were played
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of guesses played so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry, if any
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

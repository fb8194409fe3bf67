//! Best-known feedback for every letter of the alphabet
//!
//! The keyboard is a pure fold over a [`RoundHistory`]: it is rebuilt from
//! the log whenever it is needed and never edited on its own.

use super::RoundHistory;
use crate::core::Feedback;

const ALPHABET_SIZE: usize = 26;

/// Letter Status Map for one round
///
/// Each letter holds the strongest [`Feedback`] observed for it, with
/// `Correct > Misplaced > Incorrect > unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keyboard {
    statuses: [Option<Feedback>; ALPHABET_SIZE],
}

impl Keyboard {
    /// Aggregate letter knowledge from every entry of `history`
    #[must_use]
    pub fn from_history(history: &RoundHistory) -> Self {
        history
            .entries()
            .iter()
            .flat_map(|entry| {
                entry
                    .guess
                    .chars()
                    .iter()
                    .zip(entry.pattern.symbols())
                    .map(|(&letter, &feedback)| (letter, feedback))
            })
            .fold(Self::default(), |keyboard, (letter, feedback)| {
                keyboard.observe(letter, feedback)
            })
    }

    fn observe(mut self, letter: u8, feedback: Feedback) -> Self {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.statuses[i]) {
            // Option orders None below every Some, so max never downgrades
            *slot = (*slot).max(Some(feedback));
        }
        self
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }

    /// Best feedback seen for `letter`, or `None` if it was never guessed
    ///
    /// Letters outside a-z are always unknown.
    #[must_use]
    pub fn status_for(&self, letter: char) -> Option<Feedback> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .and_then(|i| self.statuses[i])
    }

    /// Every letter a-z paired with its status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<Feedback>)> + '_ {
        ('a'..='z').zip(self.statuses.iter().copied())
    }
}

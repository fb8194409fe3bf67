//! Formatting utilities for terminal output
//!
//! Pure string builders; printing lives in [`super::display`].

use crate::core::{Feedback, Word};
use crate::game::{Keyboard, MAX_TURNS, RoundHistory, SessionStats};

/// Separator printed around each history entry
pub const HISTORY_BREAK: &str = "---------------";

/// Separator printed under the keyboard heading
pub const KEYBOARD_BREAK: &str = "------------";

/// Symbol for a letter's status; unknown letters are blank
#[must_use]
pub const fn status_symbol(status: Option<Feedback>) -> char {
    match status {
        Some(feedback) => feedback.emoji(),
        None => ' ',
    }
}

/// Letters separated by single spaces: `ramble` becomes `r a m b l e`
#[must_use]
pub fn spaced_word(word: &Word) -> String {
    let letters: Vec<String> = word.text().chars().map(String::from).collect();
    letters.join(" ")
}

/// Two lines per guess: the spaced letters and the feedback squares under them
#[must_use]
pub fn history_lines(history: &RoundHistory) -> Vec<String> {
    let mut lines = Vec::with_capacity(history.len() * 3 + 1);

    for (i, entry) in history.entries().iter().enumerate() {
        lines.push(HISTORY_BREAK.to_string());
        lines.push(format!("Guess {}:  {}", i + 1, spaced_word(&entry.guess)));
        lines.push(format!("{}{}", " ".repeat(9), entry.pattern.to_emoji()));
    }

    lines.push(HISTORY_BREAK.to_string());
    lines
}

/// Alphabet laid out in `columns` tab-separated columns
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard, columns: usize) -> Vec<String> {
    let cells: Vec<String> = keyboard
        .iter()
        .map(|(letter, status)| format!("{letter}: {}", status_symbol(status)))
        .collect();

    cells
        .chunks(columns.max(1))
        .map(|row| row.join("\t"))
        .collect()
}

/// One line per win bucket followed by the lost count
#[must_use]
pub fn stats_lines(stats: &SessionStats) -> Vec<String> {
    (1..=MAX_TURNS)
        .map(|guesses| format!("{guesses} moves: {}", stats.wins_in(guesses)))
        .chain(std::iter::once(format!("Games lost: {}", stats.lost())))
        .collect()
}

/// "guess" or "guesses"
#[must_use]
pub const fn plural_guesses(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

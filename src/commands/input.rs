//! Player input parsing for the text shell
//!
//! Turns a raw line into a [`Command`], rejecting malformed guesses before
//! they ever reach a round.

use crate::core::{WORD_SIZE, Word};
use crate::wordlists::Vocabulary;
use thiserror::Error;

/// A well-formed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(Word),
    Help,
    Keyboard,
    Quit,
}

/// Why a line was rejected; the display text is shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid! Guess must be of length {expected}")]
    WrongLength { expected: usize },

    #[error("Invalid! Unknown word")]
    UnknownWord,
}

/// Parse a line as a reserved command or a guess
///
/// Input is trimmed and matched case-insensitively. Reserved tokens are
/// `q`/`quit`, `h`/`help` and `k`/`keyboard`.
///
/// # Errors
/// Returns an [`InputError`] for guesses of the wrong length or that are
/// not in `vocabulary`.
pub fn parse_command(input: &str, vocabulary: &Vocabulary) -> Result<Command, InputError> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "q" | "quit" => Ok(Command::Quit),
        "h" | "help" => Ok(Command::Help),
        "k" | "keyboard" => Ok(Command::Keyboard),
        guess => parse_guess(guess, vocabulary).map(Command::Guess),
    }
}

/// Validate a guess on its own, without command tokens
///
/// # Errors
/// Returns an [`InputError`] for guesses of the wrong length or that are
/// not in `vocabulary`.
pub fn parse_guess(input: &str, vocabulary: &Vocabulary) -> Result<Word, InputError> {
    let input = input.trim();

    if input.chars().count() != WORD_SIZE {
        return Err(InputError::WrongLength {
            expected: WORD_SIZE,
        });
    }

    Word::new(input)
        .ok()
        .filter(|word| vocabulary.contains(word))
        .ok_or(InputError::UnknownWord)
}

//! Errors raised by the game core

use thiserror::Error;

/// Error type for every fallible operation in the game core
#[derive(Debug, Error)]
pub enum GameError {
    /// A guess or answer did not have exactly `expected` letters
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A word contained something other than lowercase ASCII letters
    #[error("word '{0}' may only contain the letters a-z")]
    InvalidCharacters(String),

    /// An answer was requested from an empty answer pool
    #[error("cannot choose an answer from an empty answer pool")]
    EmptyPool,

    /// A guess or quit was offered to a round that already finished
    #[error("the round is already over")]
    RoundOver,

    /// Failure in an input/output collaborator
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the guess classifier. Everything here is
//! pure and has no knowledge of rounds, sessions or I/O.

mod error;
mod pattern;
mod word;

pub use error::GameError;
pub use pattern::{Feedback, Pattern};
pub use word::{WORD_SIZE, Word};

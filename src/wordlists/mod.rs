//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, a file loader,
//! the guess vocabulary and random answer selection.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VOCAB, VOCAB_COUNT};
pub use pool::{AnswerPool, Vocabulary};

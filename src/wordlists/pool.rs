//! Answer selection and guess vocabulary

use crate::core::{GameError, Word};
use crate::game::AnswerSource;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Words the game may pick as the hidden answer
pub struct AnswerPool<R = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl AnswerPool<StdRng> {
    /// Pool with a deterministic sequence of answers
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }

    /// Pool seeded from the operating system
    #[must_use]
    pub fn from_os_rng(words: Vec<Word>) -> Self {
        Self::new(words, StdRng::from_os_rng())
    }
}

impl<R: Rng> AnswerPool<R> {
    pub const fn new(words: Vec<Word>, rng: R) -> Self {
        Self { words, rng }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a random answer
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool holds no words.
    pub fn choose(&mut self) -> Result<Word, GameError> {
        let answer = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::EmptyPool)?;
        debug!(pool = self.words.len(), "answer chosen");
        Ok(answer)
    }
}

impl<R: Rng> AnswerSource for AnswerPool<R> {
    fn choose_answer(&mut self) -> Result<Word, GameError> {
        self.choose()
    }
}

/// Set of words accepted as guesses
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from guess words plus every possible answer
    ///
    /// Answers are always guessable, even when missing from `words`.
    #[must_use]
    pub fn new(words: &[Word], answers: &[Word]) -> Self {
        Self {
            words: words.iter().chain(answers).cloned().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

//! Wordle word representation
//!
//! A Word stores a `WORD_SIZE`-letter lowercase word as text and as bytes.

use super::GameError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every guess and answer
pub const WORD_SIZE: usize = 6;

/// A fixed-length word made of the letters a-z
///
/// Guesses and answers are both `Word`s. Construction is the only place
/// where length and alphabet are checked, so every `Word` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_SIZE],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if the word does not have exactly
    /// `WORD_SIZE` letters and `GameError::InvalidCharacters` if anything
    /// other than a-z is present.
    ///
    /// # Examples
    /// ```
    /// use wordle_rounds::core::Word;
    ///
    /// let word = Word::new("Ramble").unwrap();
    /// assert_eq!(word.text(), "ramble");
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("ramb1e").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into().to_lowercase();

        let length = text.chars().count();
        if length != WORD_SIZE {
            return Err(GameError::InvalidLength {
                expected: WORD_SIZE,
                actual: length,
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GameError::InvalidCharacters(text));
        }

        let chars: [u8; WORD_SIZE] = text
            .as_bytes()
            .try_into()
            .map_err(|_| GameError::InvalidCharacters(text.clone()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_SIZE] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_SIZE`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Count how often each letter occurs
    ///
    /// Used as the supply of letters when classifying duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

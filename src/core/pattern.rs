//! Wordle feedback calculation and representation
//!
//! Each position of a guess is classified as one of three [`Feedback`]
//! symbols. A [`Pattern`] is the sequence of symbols for a whole guess,
//! positionally aligned with it.

use super::word::WORD_SIZE;
use super::{GameError, Word};
use std::fmt;

/// Classification of a single guess position
///
/// Variants are declared from weakest to strongest, so `Ord` gives the
/// precedence used when aggregating letter knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Letter does not occur in the answer (or its supply is used up)
    Incorrect,
    /// Letter occurs in the answer at another position
    Misplaced,
    /// Letter is in the right position
    Correct,
}

impl Feedback {
    /// Coloured square used for this symbol
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬛',
        }
    }

    /// Single ASCII letter used for this symbol (`G`, `Y` or `-`)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Incorrect => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_SIZE]);

impl Pattern {
    /// All positions correct
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_SIZE]);

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_SIZE] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Duplicate letters are capped by the answer's supply of that letter,
    /// and exact-position matches always claim supply first.
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact match `Correct` and remove it from the pool
    /// 2. Second pass: left to right, mark `Misplaced` while the pool still
    ///    holds that letter, otherwise `Incorrect`
    ///
    /// # Examples
    /// ```
    /// use wordle_rounds::core::{Pattern, Word};
    ///
    /// let guess = Word::new("aaaabb").unwrap();
    /// let answer = Word::new("aabbcc").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// use wordle_rounds::core::Feedback::{Correct as C, Incorrect as I, Misplaced as M};
    /// assert_eq!(pattern.symbols(), &[C, C, I, I, M, M]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Incorrect; WORD_SIZE];
        let mut answer_available = answer.char_counts();

        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_SIZE {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                result[i] = Feedback::Correct;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_SIZE {
            if result[i] == Feedback::Correct {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Feedback::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Classify raw strings, validating both before comparing
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if either input is not exactly
    /// `WORD_SIZE` letters, or `GameError::InvalidCharacters` if either
    /// contains anything other than a-z.
    pub fn classify(guess: &str, answer: &str) -> Result<Self, GameError> {
        let guess = Word::new(guess)?;
        let answer = Word::new(answer)?;
        Ok(Self::calculate(&guess, &answer))
    }

    /// Convert pattern to a string of coloured squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Feedback::{Correct as C, Incorrect as I, Misplaced as M};
    use proptest::prelude::*;

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::classify(guess, answer).unwrap()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.symbols(), &[C; WORD_SIZE]);
    }

    #[test]
    fn pattern_all_incorrect() {
        let p = pattern("abcdef", "ghijkl");
        assert_eq!(p.symbols(), &[I; WORD_SIZE]);
        assert!(!p.is_perfect());
    }

    #[test]
    fn pattern_all_correct() {
        let p = pattern("ramble", "ramble");
        assert_eq!(p, Pattern::PERFECT);
    }

    #[test]
    fn pattern_duplicate_cap_extra_letters_incorrect() {
        // Two 'a's in the answer: the third and fourth guessed 'a' get nothing
        let p = pattern("aaaabb", "aabbcc");
        assert_eq!(p.symbols(), &[C, C, I, I, M, M]);
    }

    #[test]
    fn pattern_correct_claims_supply_before_misplaced() {
        // The only 'e' in the answer is at position 5; the earlier 'e'
        // must not steal it as a yellow
        let p = pattern("eleven", "garden");
        assert_eq!(p.symbols(), &[I, I, I, I, C, C]);

        let p = pattern("settee", "coffee");
        assert_eq!(p.symbols(), &[I, I, I, I, C, C]);
    }

    #[test]
    fn pattern_misplaced_assigned_left_to_right() {
        // One 'l' available in the answer, both guessed 'l's are misplaced
        // candidates: only the leftmost one gets it
        let p = pattern("llamas", "lizard");
        assert_eq!(p.symbols(), &[C, I, M, I, I, I]);

        let p = pattern("allege", "lizard");
        assert_eq!(p.symbols(), &[M, M, I, I, I, I]);
    }

    #[test]
    fn pattern_repeated_letter_with_multiple_supply() {
        let p = pattern("banana", "bazaar");
        assert_eq!(p.symbols(), &[C, C, I, C, I, M]);
    }

    #[test]
    fn pattern_classify_rejects_wrong_length() {
        assert!(matches!(
            Pattern::classify("crane", "ramble"),
            Err(GameError::InvalidLength { actual: 5, .. })
        ));
        assert!(matches!(
            Pattern::classify("ramble", "rambles"),
            Err(GameError::InvalidLength { actual: 7, .. })
        ));
    }

    #[test]
    fn pattern_display_letters_and_emoji() {
        let p = pattern("ramble", "marble");
        assert_eq!(p.to_string(), "YGYGGG");
        assert_eq!(p.to_emoji(), "🟨🟩🟨🟩🟩🟩");
    }

    #[test]
    fn feedback_precedence_order() {
        assert!(Feedback::Correct > Feedback::Misplaced);
        assert!(Feedback::Misplaced > Feedback::Incorrect);
    }

    fn distinct_letter_word() -> impl Strategy<Value = String> {
        let alphabet: Vec<char> = ('a'..='z').collect();
        proptest::sample::subsequence(alphabet, WORD_SIZE)
            .prop_shuffle()
            .prop_map(|letters| letters.into_iter().collect())
    }

    fn small_alphabet_word() -> impl Strategy<Value = String> {
        "[a-d]{6}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn distinct_letters_match_positional_rule(
            guess in distinct_letter_word(),
            answer in distinct_letter_word(),
        ) {
            let p = pattern(&guess, &answer);
            let g = guess.as_bytes();
            let a = answer.as_bytes();
            for i in 0..WORD_SIZE {
                let expected = if g[i] == a[i] {
                    C
                } else if a.contains(&g[i]) {
                    M
                } else {
                    I
                };
                prop_assert_eq!(p.symbols()[i], expected);
            }
        }

        #[test]
        fn duplicate_letters_never_exceed_answer_supply(
            guess in small_alphabet_word(),
            answer in small_alphabet_word(),
        ) {
            let p = pattern(&guess, &answer);
            let g = guess.as_bytes();
            let a = answer.as_bytes();

            for i in 0..WORD_SIZE {
                if g[i] == a[i] {
                    prop_assert_eq!(p.symbols()[i], C);
                }
            }

            for letter in b'a'..=b'd' {
                let supply = a.iter().filter(|&&c| c == letter).count();
                let marked = (0..WORD_SIZE)
                    .filter(|&i| g[i] == letter && p.symbols()[i] != I)
                    .count();
                let guessed = g.iter().filter(|&&c| c == letter).count();
                prop_assert_eq!(marked, supply.min(guessed));
            }
        }

        #[test]
        fn perfect_exactly_when_equal(
            guess in small_alphabet_word(),
            answer in small_alphabet_word(),
        ) {
            prop_assert_eq!(pattern(&guess, &answer).is_perfect(), guess == answer);
        }
    }
}

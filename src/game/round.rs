//! Round state machine
//!
//! A [`Round`] owns the hidden answer and the round's history. It accepts
//! guesses until the answer is found, the turn limit is hit, or the player
//! quits. All three end states are terminal.

use super::{Keyboard, RoundHistory};
use crate::core::{GameError, Pattern, Word};
use tracing::{debug, info};

/// Maximum number of guesses in one round
pub const MAX_TURNS: usize = 6;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    /// Answer found; carries the number of guesses it took
    Won { guesses: usize },
    Lost,
    Quit,
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won(usize),
    Lost,
    Quit,
}

/// One play-through from a chosen answer to a terminal state
#[derive(Debug, Clone)]
pub struct Round {
    answer: Word,
    history: RoundHistory,
    state: RoundState,
}

impl Round {
    /// Start a round with an empty history
    #[must_use]
    pub fn new(answer: Word) -> Self {
        debug!(answer = %answer, "round started");
        Self {
            answer,
            history: RoundHistory::new(),
            state: RoundState::InProgress,
        }
    }

    /// Play a guess and return the feedback it received
    ///
    /// A correct guess wins even on the last allowed turn; otherwise the
    /// round is lost once `MAX_TURNS` guesses have been played.
    ///
    /// # Errors
    /// Returns `GameError::RoundOver` if the round already ended.
    pub fn guess(&mut self, guess: Word) -> Result<Pattern, GameError> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        let pattern = Pattern::calculate(&guess, &self.answer);
        let won = pattern.is_perfect();
        debug!(guess = %guess, feedback = %pattern, turn = self.history.len() + 1, "guess classified");
        self.history.append(guess, pattern);

        if won {
            self.state = RoundState::Won {
                guesses: self.history.len(),
            };
        } else if self.history.len() >= MAX_TURNS {
            self.state = RoundState::Lost;
        }

        if let Some(outcome) = self.outcome() {
            info!(?outcome, answer = %self.answer, "round finished");
        }

        Ok(pattern)
    }

    /// Validate raw text and play it as a guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` or `GameError::InvalidCharacters`
    /// for malformed input, and `GameError::RoundOver` if the round ended.
    pub fn submit(&mut self, text: &str) -> Result<Pattern, GameError> {
        let guess = Word::new(text)?;
        self.guess(guess)
    }

    /// Abandon the round
    ///
    /// # Errors
    /// Returns `GameError::RoundOver` if the round already ended.
    pub fn quit(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }
        info!(turn = self.history.len(), "round quit");
        self.state = RoundState::Quit;
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, RoundState::InProgress)
    }

    /// Terminal outcome, or `None` while the round is in progress
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::InProgress => None,
            RoundState::Won { guesses } => Some(RoundOutcome::Won(guesses)),
            RoundState::Lost => Some(RoundOutcome::Lost),
            RoundState::Quit => Some(RoundOutcome::Quit),
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Number of the next guess (1-based)
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// Feedback of the most recent guess
    #[must_use]
    pub fn last_pattern(&self) -> Option<Pattern> {
        self.history.last().map(|entry| entry.pattern)
    }

    /// Letter knowledge derived from the current history
    #[must_use]
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::from_history(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(answer: &str) -> Round {
        Round::new(Word::new(answer).unwrap())
    }

    #[test]
    fn new_round_is_in_progress() {
        let round = start("garden");
        assert_eq!(round.state(), RoundState::InProgress);
        assert!(!round.is_over());
        assert_eq!(round.outcome(), None);
        assert_eq!(round.turn(), 1);
        assert!(round.history().is_empty());
    }

    #[test]
    fn wrong_guess_stays_in_progress() {
        let mut round = start("garden");
        let pattern = round.submit("ramble").unwrap();

        assert!(!pattern.is_perfect());
        assert_eq!(round.state(), RoundState::InProgress);
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.last_pattern(), Some(pattern));
        assert_eq!(round.turn(), 2);
    }

    #[test]
    fn correct_guess_wins_with_history_length() {
        let mut round = start("garden");
        round.submit("ramble").unwrap();
        round.submit("bright").unwrap();
        let pattern = round.submit("garden").unwrap();

        assert!(pattern.is_perfect());
        assert_eq!(round.state(), RoundState::Won { guesses: 3 });
        assert_eq!(round.outcome(), Some(RoundOutcome::Won(3)));
    }

    #[test]
    fn win_on_last_turn_is_not_a_loss() {
        let mut round = start("garden");
        for _ in 0..MAX_TURNS - 1 {
            round.submit("ramble").unwrap();
        }
        round.submit("garden").unwrap();

        assert_eq!(round.outcome(), Some(RoundOutcome::Won(MAX_TURNS)));
    }

    #[test]
    fn running_out_of_turns_loses() {
        let mut round = start("garden");
        for i in 0..MAX_TURNS {
            assert!(!round.is_over(), "ended early at guess {i}");
            round.submit("ramble").unwrap();
        }

        assert_eq!(round.state(), RoundState::Lost);
        assert_eq!(round.history().len(), MAX_TURNS);
    }

    #[test]
    fn terminal_round_rejects_guesses() {
        let mut round = start("garden");
        round.submit("garden").unwrap();

        assert!(matches!(round.submit("ramble"), Err(GameError::RoundOver)));
        assert!(matches!(round.quit(), Err(GameError::RoundOver)));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn history_never_exceeds_turn_limit() {
        let mut round = start("garden");
        for _ in 0..MAX_TURNS + 3 {
            let _ = round.submit("ramble");
        }
        assert_eq!(round.history().len(), MAX_TURNS);
    }

    #[test]
    fn quit_is_terminal_at_any_turn() {
        let mut round = start("garden");
        round.quit().unwrap();
        assert_eq!(round.outcome(), Some(RoundOutcome::Quit));

        let mut round = start("garden");
        round.submit("ramble").unwrap();
        round.quit().unwrap();
        assert_eq!(round.state(), RoundState::Quit);
        assert!(matches!(round.submit("garden"), Err(GameError::RoundOver)));
    }

    #[test]
    fn submit_rejects_wrong_length_without_using_a_turn() {
        let mut round = start("garden");
        assert!(matches!(
            round.submit("crane"),
            Err(GameError::InvalidLength { actual: 5, .. })
        ));
        assert!(round.history().is_empty());
    }

    #[test]
    fn keyboard_tracks_history() {
        let mut round = start("marble");
        round.submit("ramble").unwrap();
        let keyboard = round.keyboard();
        assert_eq!(keyboard.status_for('a'), Some(crate::core::Feedback::Correct));
        assert_eq!(keyboard.status_for('r'), Some(crate::core::Feedback::Misplaced));
    }
}

//! Session controller
//!
//! Runs rounds back to back, folding each finished round into a
//! [`SessionStats`] accumulator. Choosing answers and talking to the player
//! are delegated to the [`AnswerSource`] and [`Player`] collaborators.

use super::round::{MAX_TURNS, Round, RoundOutcome};
use crate::core::{GameError, Word};
use tracing::{info, warn};

/// Win distribution over guess counts plus a lost bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    won: [usize; MAX_TURNS],
    lost: usize,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished round into the statistics
    ///
    /// `Won(k)` bumps bucket `k`, `Lost` bumps the lost bucket and `Quit`
    /// leaves everything untouched.
    #[must_use]
    pub fn record(mut self, outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Won(guesses) => match guesses
                .checked_sub(1)
                .and_then(|i| self.won.get_mut(i))
            {
                Some(bucket) => *bucket += 1,
                None => warn!(guesses, "win outside the turn limit ignored"),
            },
            RoundOutcome::Lost => self.lost += 1,
            RoundOutcome::Quit => {}
        }
        self
    }

    /// Close out a finished round
    ///
    /// Folds `outcome` in with [`record`](Self::record) and reports whether
    /// the session may offer another round. A quit ends the session and is
    /// never recorded.
    #[must_use]
    pub fn conclude(self, outcome: RoundOutcome) -> (Self, bool) {
        (self.record(outcome), outcome != RoundOutcome::Quit)
    }

    /// Rounds won in exactly `guesses` guesses (1-based)
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        guesses
            .checked_sub(1)
            .and_then(|i| self.won.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Win counts indexed by guess count minus one
    #[must_use]
    pub const fn distribution(&self) -> &[usize; MAX_TURNS] {
        &self.won
    }

    #[must_use]
    pub const fn lost(&self) -> usize {
        self.lost
    }

    #[must_use]
    pub fn games_won(&self) -> usize {
        self.won.iter().sum()
    }

    /// Completed rounds (quits excluded)
    #[must_use]
    pub fn games_played(&self) -> usize {
        self.games_won() + self.lost
    }

    /// Percentage of completed rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            0.0
        } else {
            self.games_won() as f64 / played as f64 * 100.0
        }
    }
}

/// Supplies the hidden answer for each new round
pub trait AnswerSource {
    /// # Errors
    /// Returns `GameError::EmptyPool` when no answer can be chosen.
    fn choose_answer(&mut self) -> Result<Word, GameError>;
}

/// A player's decision for the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Guess(Word),
    Quit,
}

/// The person (or script) playing the session
///
/// Input validation belongs to the implementor: `next_move` only ever hands
/// the controller a well-formed [`Word`] or a quit.
pub trait Player {
    /// Decide the next move for `round`
    ///
    /// # Errors
    /// Returns an error if input could not be obtained.
    fn next_move(&mut self, round: &Round) -> Result<Move, GameError>;

    /// Called after each guess has been recorded
    ///
    /// # Errors
    /// Returns an error if the player could not be shown the update.
    fn guess_recorded(&mut self, _round: &Round) -> Result<(), GameError> {
        Ok(())
    }

    /// Called once a round ends in a win or a loss
    ///
    /// # Errors
    /// Returns an error if the player could not be shown the result.
    fn round_finished(&mut self, _round: &Round, _stats: &SessionStats) -> Result<(), GameError> {
        Ok(())
    }

    /// Ask whether another round should be played
    ///
    /// # Errors
    /// Returns an error if input could not be obtained.
    fn play_again(&mut self) -> Result<bool, GameError>;
}

/// Repeated rounds against one player
pub struct Session<A, P> {
    answers: A,
    player: P,
}

impl<A: AnswerSource, P: Player> Session<A, P> {
    pub const fn new(answers: A, player: P) -> Self {
        Self { answers, player }
    }

    /// Play one round from answer selection to a terminal state
    ///
    /// # Errors
    /// Propagates errors from answer selection and from the player.
    pub fn play_round(&mut self) -> Result<Round, GameError> {
        let answer = self.answers.choose_answer()?;
        let mut round = Round::new(answer);

        while !round.is_over() {
            match self.player.next_move(&round)? {
                Move::Guess(word) => {
                    round.guess(word)?;
                    self.player.guess_recorded(&round)?;
                }
                Move::Quit => round.quit()?,
            }
        }

        Ok(round)
    }

    /// Play rounds until the player declines another or quits
    ///
    /// `stats` is the accumulator carried into the session; the updated
    /// value is returned when the session ends.
    ///
    /// # Errors
    /// Any error ends the session and is returned to the caller.
    pub fn run(&mut self, mut stats: SessionStats) -> Result<SessionStats, GameError> {
        loop {
            let round = self.play_round()?;
            let outcome = round.outcome().unwrap_or(RoundOutcome::Quit);

            let (updated, goes_on) = stats.conclude(outcome);
            stats = updated;
            if !goes_on {
                info!("session ended by quit");
                return Ok(stats);
            }

            self.player.round_finished(&round, &stats)?;

            if !self.player.play_again()? {
                info!(played = stats.games_played(), won = stats.games_won(), "session ended");
                return Ok(stats);
            }
        }
    }

    pub const fn player(&self) -> &P {
        &self.player
    }

    pub fn into_parts(self) -> (A, P) {
        (self.answers, self.player)
    }
}

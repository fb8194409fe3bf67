//! Round and session logic
//!
//! Builds on [`crate::core`] to play rounds: the guess log, letter
//! knowledge, the round state machine and the multi-round controller.

mod history;
mod keyboard;
pub mod round;
pub mod session;

pub use history::{HistoryEntry, RoundHistory};
pub use keyboard::Keyboard;
pub use round::{MAX_TURNS, Round, RoundOutcome, RoundState};
pub use session::{AnswerSource, Move, Player, Session, SessionStats};

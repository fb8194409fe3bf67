//! Wordle Rounds
//!
//! Six-letter Wordle: feedback classification with correct duplicate-letter
//! handling, round bookkeeping, a letter-knowledge keyboard and multi-round
//! sessions with win statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rounds::core::{Pattern, Word};
//! use wordle_rounds::game::{Round, RoundState};
//!
//! let answer = Word::new("garden").unwrap();
//! let mut round = Round::new(answer.clone());
//!
//! let pattern = round.guess(Word::new("ramble").unwrap()).unwrap();
//! assert_eq!(pattern, Pattern::calculate(&Word::new("ramble").unwrap(), &answer));
//!
//! round.guess(answer).unwrap();
//! assert_eq!(round.state(), RoundState::Won { guesses: 2 });
//! ```

// Core domain types
pub mod core;

// Rounds, letter knowledge and sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File-backed tracing
pub mod logging;

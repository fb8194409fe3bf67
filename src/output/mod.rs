//! Terminal output formatting
//!
//! Display utilities for the text shell.

pub mod display;
pub mod formatters;

pub use display::{print_history, print_keyboard, print_outcome, print_stats};

//! Command implementations

pub mod input;
pub mod simple;

pub use input::{Command, InputError, parse_command, parse_guess};
pub use simple::{ConsolePlayer, run_simple};

//! Display functions for the text shell

use super::formatters::{
    KEYBOARD_BREAK, history_lines, keyboard_lines, plural_guesses, stats_lines,
};
use crate::game::{Keyboard, Round, RoundHistory, RoundOutcome, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Print every guess of the round with its feedback
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_history(out: &mut impl Write, history: &RoundHistory) -> io::Result<()> {
    for line in history_lines(history) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Print the letter knowledge in two columns
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_keyboard(out: &mut impl Write, keyboard: &Keyboard) -> io::Result<()> {
    writeln!(out, "\n{}", "Keyboard information".bright_cyan().bold())?;
    writeln!(out, "{KEYBOARD_BREAK}")?;
    for line in keyboard_lines(keyboard, 2) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Print the win distribution and lost count
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_stats(out: &mut impl Write, stats: &SessionStats) -> io::Result<()> {
    writeln!(out, "\n{}", "Games won in:".bright_cyan().bold())?;
    for line in stats_lines(stats) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Announce how a finished round ended
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome(out: &mut impl Write, round: &Round) -> io::Result<()> {
    match round.outcome() {
        Some(RoundOutcome::Won(guesses)) => writeln!(
            out,
            "{}",
            format!("Correct! You won in {guesses} {}!", plural_guesses(guesses))
                .green()
                .bold()
        ),
        Some(RoundOutcome::Lost) => writeln!(
            out,
            "{}",
            format!("You lose! The answer was: {}", round.answer())
                .red()
                .bold()
        ),
        Some(RoundOutcome::Quit) | None => Ok(()),
    }
}

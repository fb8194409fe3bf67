//! Simple interactive CLI mode
//!
//! Line-based game shell: prompts for guesses, prints the history after each
//! one and the statistics after each round.

use super::input::{Command, parse_command};
use crate::core::GameError;
use crate::game::{AnswerSource, Move, Player, Round, Session, SessionStats};
use crate::output::{print_history, print_keyboard, print_outcome, print_stats};
use crate::wordlists::Vocabulary;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Guess the hidden six-letter word in six tries.
After each guess every letter is marked:
  🟩 right letter, right place
  🟨 in the word, somewhere else
  ⬛ not in the word (or no more copies left)
Commands: 'k' shows the keyboard, 'h' shows this help, 'q' quits.";

/// Player reading guesses from `input` and writing to `output`
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
    vocabulary: Vocabulary,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub const fn new(input: R, output: W, vocabulary: Vocabulary) -> Self {
        Self {
            input,
            output,
            vocabulary,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn next_move(&mut self, round: &Round) -> Result<Move, GameError> {
        loop {
            let Some(line) = self.prompt(&format!("Enter guess {}: ", round.turn()))? else {
                return Ok(Move::Quit);
            };

            match parse_command(&line, &self.vocabulary) {
                Ok(Command::Guess(word)) => return Ok(Move::Guess(word)),
                Ok(Command::Quit) => return Ok(Move::Quit),
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Ok(Command::Keyboard) => print_keyboard(&mut self.output, &round.keyboard())?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn guess_recorded(&mut self, round: &Round) -> Result<(), GameError> {
        print_history(&mut self.output, round.history())?;
        Ok(())
    }

    fn round_finished(&mut self, round: &Round, stats: &SessionStats) -> Result<(), GameError> {
        print_outcome(&mut self.output, round)?;
        print_stats(&mut self.output, stats)?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool, GameError> {
        let answer = self.prompt("Would you like to play again (y/n)? ")?;
        Ok(matches!(
            answer.map(|a| a.to_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if answer selection fails or there's an I/O error
/// reading input or writing output.
pub fn run_simple<A: AnswerSource>(
    answers: A,
    vocabulary: Vocabulary,
) -> Result<SessionStats, GameError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Six Letters                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{HELP}\n");

    let player = ConsolePlayer::new(io::stdin().lock(), io::stdout(), vocabulary);
    let stats = Session::new(answers, player).run(SessionStats::new())?;

    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

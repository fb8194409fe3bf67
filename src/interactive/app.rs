//! TUI application state and logic

use crate::commands::parse_guess;
use crate::core::{GameError, WORD_SIZE};
use crate::game::{AnswerSource, Round, RoundOutcome, SessionStats};
use crate::output::formatters::plural_guesses;
use crate::wordlists::Vocabulary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Messages kept for the message panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<A> {
    answers: A,
    vocabulary: Vocabulary,
    pub round: Round,
    pub stats: SessionStats,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<A: AnswerSource> App<A> {
    /// Create the app and start the first round
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if no answer can be chosen.
    pub fn new(mut answers: A, vocabulary: Vocabulary) -> Result<Self, GameError> {
        let round = Round::new(answers.choose_answer()?);

        Ok(Self {
            answers,
            vocabulary,
            round,
            stats: SessionStats::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {WORD_SIZE}-letter word! Type and press Enter."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    /// Apply one key press
    ///
    /// # Errors
    /// Returns an error if a new round cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Esc => self.quit(),
            _ if self.round.is_over() => match key.code {
                KeyCode::Char('q' | 'Q') => self.quit(),
                KeyCode::Char('n' | 'N') => self.new_game()?,
                _ => {}
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_SIZE {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }

        Ok(())
    }

    /// Play the input buffer as a guess
    pub fn submit(&mut self) {
        let word = match parse_guess(&self.input_buffer, &self.vocabulary) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Err(err) = self.round.guess(word) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();

        if let Some(outcome) = self.round.outcome() {
            self.finish_round(outcome);
        }
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        let (stats, goes_on) = self.stats.conclude(outcome);
        self.stats = stats;
        if !goes_on {
            self.should_quit = true;
            return;
        }

        match outcome {
            RoundOutcome::Won(guesses) => {
                let text = format!(
                    "Correct! You won in {guesses} {}!",
                    plural_guesses(guesses)
                );
                self.add_message(&text, MessageStyle::Success);
            }
            RoundOutcome::Lost => {
                let text = format!("You lose! The answer was: {}", self.round.answer());
                self.add_message(&text, MessageStyle::Error);
            }
            RoundOutcome::Quit => return,
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh round once the current one is over
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if no answer can be chosen.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        if !self.round.is_over() {
            return Ok(());
        }

        self.round = Round::new(self.answers.choose_answer()?);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Leave the app; an unfinished round counts as quit and is not recorded
    pub fn quit(&mut self) {
        if self.round.quit().is_ok() {
            self.finish_round(RoundOutcome::Quit);
        }
        self.should_quit = true;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics gathered during the session.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<A: AnswerSource>(app: App<A>) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let stats = res?;
    info!(played = stats.games_played(), won = stats.games_won(), "session ended");
    Ok(stats)
}

fn run_app<B: ratatui::backend::Backend, A: AnswerSource>(
    terminal: &mut Terminal<B>,
    mut app: App<A>,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }

        if app.should_quit {
            return Ok(app.stats);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::AnswerPool;
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App<AnswerPool> {
        let pool = AnswerPool::seeded(words_from_slice(&["garden"]), 3);
        let vocab = Vocabulary::new(&words_from_slice(&["ramble", "bright"]), pool.words());
        App::new(pool, vocab).unwrap()
    }

    fn press(app: &mut App<AnswerPool>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App<AnswerPool>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn empty_pool_fails_to_start() {
        let pool = AnswerPool::seeded(Vec::new(), 3);
        assert!(matches!(
            App::new(pool, Vocabulary::default()),
            Err(GameError::EmptyPool)
        ));
    }

    #[test]
    fn typing_fills_buffer_up_to_word_size() {
        let mut app = app();
        for c in "RAMBLES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "ramble");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "rambl");

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input_buffer, "rambl");
    }

    #[test]
    fn short_guess_is_rejected_with_message() {
        let mut app = app();
        type_word(&mut app, "ramb");

        assert!(app.round.history().is_empty());
        assert_eq!(app.input_buffer, "ramb");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Invalid! Guess must be of length 6");
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut app = app();
        type_word(&mut app, "zzzzzz");
        assert!(app.round.history().is_empty());
        assert_eq!(app.messages.last().unwrap().text, "Invalid! Unknown word");
    }

    #[test]
    fn winning_records_stats_and_waits_for_new_game() {
        let mut app = app();
        type_word(&mut app, "ramble");
        type_word(&mut app, "garden");

        assert_eq!(app.round.outcome(), Some(RoundOutcome::Won(2)));
        assert_eq!(app.stats.wins_in(2), 1);
        assert!(app.input_buffer.is_empty());

        // Letters are ignored until a new game starts
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.round.is_over());
        assert!(app.round.history().is_empty());
        assert_eq!(app.round.answer(), &Word::new("garden").unwrap());
    }

    #[test]
    fn losing_reveals_answer() {
        let mut app = app();
        for _ in 0..6 {
            type_word(&mut app, "bright");
        }

        assert_eq!(app.stats.lost(), 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "You lose! The answer was: garden")
        );
    }

    #[test]
    fn escape_quits_without_recording() {
        let mut app = app();
        type_word(&mut app, "ramble");
        press(&mut app, KeyCode::Esc);

        assert!(app.should_quit);
        assert_eq!(app.round.outcome(), Some(RoundOutcome::Quit));
        assert_eq!(app.stats, SessionStats::new());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn q_after_round_quits() {
        let mut app = app();
        type_word(&mut app, "garden");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(app.stats.wins_in(1), 1);
    }

    #[test]
    fn uppercase_keys_work_after_round() {
        let mut app = app();
        type_word(&mut app, "garden");

        press(&mut app, KeyCode::Char('N'));
        assert!(!app.round.is_over());
        assert!(!app.should_quit);

        type_word(&mut app, "garden");
        press(&mut app, KeyCode::Char('Q'));
        assert!(app.should_quit);
        assert_eq!(app.stats.wins_in(1), 2);
    }

    #[test]
    fn quit_after_finished_round_keeps_its_result() {
        let mut app = app();
        type_word(&mut app, "garden");
        app.quit();

        assert!(app.should_quit);
        assert_eq!(app.round.outcome(), Some(RoundOutcome::Won(1)));
        assert_eq!(app.stats.games_played(), 1);
    }

    #[test]
    fn new_game_ignored_mid_round() {
        let mut app = app();
        type_word(&mut app, "ramble");
        app.new_game().unwrap();
        assert_eq!(app.round.history().len(), 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}

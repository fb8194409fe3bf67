//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, WORD_SIZE};
use crate::game::{Keyboard, MAX_TURNS, Round, RoundOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Widest distribution bar in the statistics panel
const BAR_WIDTH: usize = 20;

/// Main UI rendering function
pub fn ui<A>(f: &mut Frame, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard, stats, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colour for a feedback symbol
#[must_use]
pub const fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Misplaced => Color::Yellow,
        Feedback::Incorrect => Color::DarkGray,
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("WORDLE - {WORD_SIZE} letters, {MAX_TURNS} guesses"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_lines(round: &Round, input: &str) -> Vec<Line<'static>> {
    let played = round.history().entries();
    let mut lines = Vec::with_capacity(MAX_TURNS * 2);

    for row in 0..MAX_TURNS {
        let spans: Vec<Span> = if let Some(entry) = played.get(row) {
            entry
                .guess
                .text()
                .chars()
                .zip(entry.pattern.symbols())
                .flat_map(|(letter, &feedback)| {
                    let style = Style::default()
                        .fg(Color::Black)
                        .bg(feedback_color(feedback))
                        .add_modifier(Modifier::BOLD);
                    [tile(letter, style), Span::raw(" ")]
                })
                .collect()
        } else if row == played.len() && !round.is_over() {
            let typed = input.chars().chain(std::iter::repeat('_'));
            typed
                .take(WORD_SIZE)
                .flat_map(|letter| {
                    let style = Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD);
                    [tile(letter, style), Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_SIZE)
                .flat_map(|_| {
                    [
                        tile('.', Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let board = Paragraph::new(board_lines(&app.round, &app.input_buffer))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Guess {}/{MAX_TURNS} ", app.round.turn().min(MAX_TURNS)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                     // Keyboard
            Constraint::Length(MAX_TURNS as u16 + 4), // Statistics
            Constraint::Min(3),                        // Messages
        ])
        .split(area);

    render_keyboard(f, &app.round.keyboard(), chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn key_style(status: Option<Feedback>) -> Style {
    match status {
        Some(Feedback::Incorrect) => Style::default().fg(Color::DarkGray),
        Some(feedback) => Style::default()
            .fg(Color::Black)
            .bg(feedback_color(feedback))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &Keyboard, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|letter| tile(letter, key_style(keyboard.status_for(letter))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_stats<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let stats = &app.stats;
    let highest = stats.distribution().iter().copied().max().unwrap_or(0).max(1);
    let current = match app.round.outcome() {
        Some(RoundOutcome::Won(guesses)) => Some(guesses),
        _ => None,
    };

    let mut lines = vec![Line::from(format!(
        "Played: {} | Win rate: {:.0}%",
        stats.games_played(),
        stats.win_rate()
    ))];

    for (i, &count) in stats.distribution().iter().enumerate() {
        let guesses = i + 1;
        let width = (count * BAR_WIDTH / highest).max(usize::from(count > 0));
        let color = if current == Some(guesses) {
            Color::Green
        } else {
            Color::Cyan
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled("█".repeat(width), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw("Lost "),
        Span::styled(stats.lost().to_string(), Style::default().fg(Color::Red)),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let (title, content, color) = if app.round.is_over() {
        (
            " Round over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        )
    } else {
        (
            " Enter Guess | Enter to submit, Backspace to delete ",
            app.input_buffer.as_str(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<A>(f: &mut Frame, app: &App<A>, area: Rect) {
    let help_text = if app.round.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{AnswerPool, Vocabulary};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<AnswerPool> {
        let pool = AnswerPool::seeded(words_from_slice(&["garden"]), 9);
        let vocab = Vocabulary::new(&words_from_slice(&["ramble"]), pool.words());
        App::new(pool, vocab).unwrap()
    }

    fn render(app: &App<AnswerPool>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn fresh_game_renders_panels() {
        let screen = render(&app());

        assert!(screen.contains("WORDLE - 6 letters, 6 guesses"));
        assert!(screen.contains(" Keyboard "));
        assert!(screen.contains(" Statistics "));
        assert!(screen.contains("Played: 0 | Win rate: 0%"));
        assert!(screen.contains(" Guess 1/6 "));
    }

    #[test]
    fn played_guess_and_input_appear_on_board() {
        let mut app = app();
        app.input_buffer = "ramble".to_string();
        app.submit();
        app.input_buffer = "ga".to_string();

        let screen = render(&app);
        assert!(screen.contains(" R   A   M   B   L   E "));
        assert!(screen.contains(" G   A   _ "));
        assert!(screen.contains(" Guess 2/6 "));
    }

    #[test]
    fn finished_round_shows_new_game_prompt() {
        let mut app = app();
        app.input_buffer = "garden".to_string();
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("Round over"));
        assert!(screen.contains("Played: 1 | Win rate: 100%"));
        assert!(screen.contains("Correct! You won in 1 guess!"));
        assert_eq!(app.round.answer(), &Word::new("garden").unwrap());
    }

    #[test]
    fn feedback_colors_are_distinct() {
        assert_eq!(feedback_color(Feedback::Correct), Color::Green);
        assert_eq!(feedback_color(Feedback::Misplaced), Color::Yellow);
        assert_eq!(feedback_color(Feedback::Incorrect), Color::DarkGray);
    }

    #[test]
    fn board_has_a_row_per_turn() {
        let round = Round::new(Word::new("garden").unwrap());
        let lines = board_lines(&round, "");
        assert_eq!(lines.len(), MAX_TURNS * 2);
    }
}

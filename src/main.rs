//! Wordle Rounds - CLI
//!
//! Six-letter Wordle with a terminal UI and a line-based shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use wordle_rounds::{
    commands::run_simple,
    core::Word,
    game::SessionStats,
    interactive::{App, run_tui},
    logging,
    wordlists::{
        ANSWERS, AnswerPool, VOCAB, Vocabulary,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_rounds",
    about = "Guess the six-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accepted guesses, one per line (default: embedded list)
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,

    /// Possible answers, one per line (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Seed for reproducible answer selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,
}

fn load_list(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(words_from_slice(embedded)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path).context("failed to initialize logging")?;
    }

    let vocab = load_list(cli.vocab.as_deref(), VOCAB)?;
    let answers = load_list(cli.answers.as_deref(), ANSWERS)?;
    let vocabulary = Vocabulary::new(&vocab, &answers);
    info!(vocab = vocabulary.len(), answers = answers.len(), "word lists ready");

    let pool = match cli.seed {
        Some(seed) => AnswerPool::seeded(answers, seed),
        None => AnswerPool::from_os_rng(answers),
    };

    // Default to Play mode if no command given
    let stats = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(pool, vocabulary)?,
        Commands::Simple => run_simple(pool, vocabulary).context("game session failed")?,
    };

    info!(
        played = stats.games_played(),
        won = stats.games_won(),
        lost = stats.lost(),
        "exiting"
    );
    Ok(())
}

fn run_play_command(pool: AnswerPool, vocabulary: Vocabulary) -> Result<SessionStats> {
    let app = App::new(pool, vocabulary).context("could not start a round")?;
    run_tui(app)
}

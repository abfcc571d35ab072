//! Six-letter Wordle - CLI
//!
//! Terminal Wordle with a TUI board and a plain line-based mode. Six-letter
//! words, six attempts, online dictionaries with offline fallbacks.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use wordle_six::{
    commands::run_simple,
    core::{Game, GameConfig},
    interactive::run_tui,
    logging,
    sources::{DatamuseSource, ListSource, WordSource},
    validate::{DictionaryValidator, HeuristicValidator, WordValidator},
    wordlists::{fallback_words, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_six",
    about = "Six-letter Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 6)]
    word_length: usize,

    /// Guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Play without network lookups (built-in words, local validation)
    #[arg(long, global = true)]
    offline: bool,

    /// Custom target-word list, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (line-based, no TUI)
    Simple,
}

/// Build the word list used for offline targets and remote fallback
fn load_fallback(wordlist: Option<&PathBuf>, word_length: usize) -> Result<ListSource> {
    let words = match wordlist {
        Some(path) => load_from_file(path, word_length)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => fallback_words(word_length),
    };

    ListSource::new(words)
        .with_context(|| format!("no {word_length}-letter words available for targets"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.clone());

    ensure!(cli.word_length >= 2, "word length must be at least 2");
    ensure!(cli.max_attempts >= 1, "max attempts must be at least 1");

    let fallback = load_fallback(cli.wordlist.as_ref(), cli.word_length)?;

    let (source, validator): (Arc<dyn WordSource>, Arc<dyn WordValidator>) = if cli.offline {
        (
            Arc::new(fallback),
            Arc::new(HeuristicValidator::new(cli.word_length)),
        )
    } else {
        (
            Arc::new(DatamuseSource::new(cli.word_length, fallback)),
            Arc::new(DictionaryValidator::new(cli.word_length)),
        )
    };

    let config = GameConfig::new(cli.word_length, cli.max_attempts);
    let game = Game::start(config, source, validator).await;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(game).await,
        Commands::Simple => run_simple(game).await,
    }
}

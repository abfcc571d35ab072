//! Six-letter Wordle
//!
//! A terminal word-guessing game: six attempts to find a six-letter word,
//! with per-letter feedback after every accepted guess. Target words come
//! from the Datamuse API with a built-in fallback list; guesses are checked
//! against online dictionaries with a degraded offline heuristic.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordle_six::core::{Game, GameConfig};
//! use wordle_six::sources::ListSource;
//! use wordle_six::validate::HeuristicValidator;
//!
//! # async fn demo() {
//! let config = GameConfig::default();
//! let source = Arc::new(ListSource::from_embedded(config.word_length).unwrap());
//! let validator = Arc::new(HeuristicValidator::new(config.word_length));
//!
//! let mut game = Game::start(config, source, validator).await;
//! for letter in "python".chars() {
//!     game.append_letter(letter);
//! }
//! let outcome = game.submit_guess().await;
//! println!("{outcome:?} -> {:?}", game.state().status());
//! # }
//! ```

// Core game engine
pub mod core;

// Target word supply
pub mod sources;

// Guess validation
pub mod validate;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod logging;

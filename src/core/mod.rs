//! Core game engine
//!
//! The guess-evaluation and game-state machinery, independent of any
//! presentation. Scoring is pure; the state machine reaches its word source
//! and validator only through traits.

mod game;
mod scoring;
mod word;

pub use game::{Game, GameConfig, GameState, GameStatus, SubmitOutcome};
pub use scoring::{LetterStatus, key_status, letter_status, score_guess};
pub use word::{Word, WordError};

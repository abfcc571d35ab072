//! Game state machine
//!
//! `GameState` is the snapshotable state of one game: target word, guess
//! history, in-progress input, and status. `Game` is the controller that
//! owns a `GameState` together with its word source and validator, and is
//! the only thing that mutates it. Transitions are serialized through
//! `&mut self`, and at most one collaborator call is in flight per game:
//! `submit_guess` and `reset` do not touch the state until that call has
//! resolved, so no torn state is ever observable.

use super::Word;
use super::scoring::{self, LetterStatus, score_guess};
use crate::sources::WordSource;
use crate::validate::WordValidator;
use std::sync::Arc;

/// Fixed per-game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Guesses allowed per game
    pub max_attempts: usize,
}

impl GameConfig {
    /// Create a configuration with explicit dimensions
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }
}

impl Default for GameConfig {
    /// The classic setup: six letters, six attempts
    fn default() -> Self {
        Self::new(6, 6)
    }
}

/// Progression status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting transitions
    Playing,
    /// A guess matched the target (terminal)
    Won,
    /// Attempts exhausted without a match (terminal)
    Lost,
}

/// Result of a `submit_guess` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was recorded; the game may now be won or lost
    Accepted,
    /// The validator rejected the candidate; input is kept for editing
    InvalidWord,
    /// Nothing happened: input not full length, or the game is over
    Ignored,
}

/// Snapshot of one game in progress
///
/// Read-only from outside the engine; the presentation layer renders from
/// this and queries feedback on demand. Created fresh at game start and
/// replaced wholesale on reset.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    target: Word,
    guesses: Vec<Word>,
    current_input: String,
    status: GameStatus,
}

impl GameState {
    pub(crate) fn new(config: GameConfig, target: Word) -> Self {
        Self {
            config,
            target,
            guesses: Vec::new(),
            current_input: String::new(),
            status: GameStatus::Playing,
        }
    }

    /// The game's configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The secret target word
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Recorded guesses, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The in-progress guess buffer (0 to `word_length` letters)
    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Current progression status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Per-letter feedback for a completed row
    ///
    /// Returns `None` for rows without a recorded guess, including the row
    /// currently being typed.
    #[must_use]
    pub fn letter_statuses(&self, row: usize) -> Option<Vec<LetterStatus>> {
        self.guesses
            .get(row)
            .map(|guess| score_guess(guess, &self.target))
    }

    /// Aggregated keyboard hint for one letter
    ///
    /// `None` until the letter appears in a recorded guess.
    #[must_use]
    pub fn key_status(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        scoring::key_status(
            letter.to_ascii_uppercase() as u8,
            &self.guesses,
            &self.target,
        )
    }

    fn append_letter(&mut self, letter: char) -> bool {
        if self.is_over()
            || !letter.is_ascii_alphabetic()
            || self.current_input.len() >= self.config.word_length
        {
            return false;
        }
        self.current_input.push(letter.to_ascii_uppercase());
        true
    }

    fn delete_letter(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    fn record_guess(&mut self, guess: Word) {
        let won = guess == self.target;
        self.guesses.push(guess);
        self.current_input.clear();

        if won {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
        }
    }
}

/// One game of Wordle and the services it depends on
///
/// The controller drives every transition; the presentation layer holds it
/// and re-renders after each mutation. Sources and validators are shared
/// (`Arc`) and may serve many independent games concurrently.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use wordle_six::core::{Game, GameConfig, SubmitOutcome};
/// use wordle_six::sources::ListSource;
/// use wordle_six::validate::HeuristicValidator;
///
/// # async fn demo() {
/// let config = GameConfig::default();
/// let source = Arc::new(ListSource::from_embedded(config.word_length).unwrap());
/// let validator = Arc::new(HeuristicValidator::new(config.word_length));
///
/// let mut game = Game::start(config, source, validator).await;
/// for letter in "python".chars() {
///     game.append_letter(letter);
/// }
/// if game.submit_guess().await == SubmitOutcome::Accepted {
///     println!("status: {:?}", game.state().status());
/// }
/// # }
/// ```
pub struct Game {
    state: GameState,
    source: Arc<dyn WordSource>,
    validator: Arc<dyn WordValidator>,
}

impl Game {
    /// Start a new game with a target fetched from the source
    pub async fn start(
        config: GameConfig,
        source: Arc<dyn WordSource>,
        validator: Arc<dyn WordValidator>,
    ) -> Self {
        let target = source.fetch_word().await;
        debug_assert_eq!(target.len(), config.word_length);

        Self {
            state: GameState::new(config, target),
            source,
            validator,
        }
    }

    /// The current state, for rendering and queries
    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// A read-only copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Append one letter to the in-progress guess
    ///
    /// Accepts ASCII letters only, normalized to uppercase. Returns whether
    /// the letter was applied; a full buffer, a finished game, or a
    /// non-letter all leave the state untouched.
    pub fn append_letter(&mut self, letter: char) -> bool {
        self.state.append_letter(letter)
    }

    /// Remove the last letter of the in-progress guess, if any
    pub fn delete_letter(&mut self) -> bool {
        self.state.delete_letter()
    }

    /// Submit the in-progress guess
    ///
    /// Awaits the validator exactly once and only then mutates state. A
    /// rejected candidate leaves the input buffer in place so the player can
    /// edit and resubmit. An accepted guess is recorded, the buffer is
    /// cleared, and the status moves to `Won` or `Lost` when warranted.
    pub async fn submit_guess(&mut self) -> SubmitOutcome {
        if self.state.is_over() || self.state.current_input.len() != self.state.config.word_length
        {
            return SubmitOutcome::Ignored;
        }

        // The buffer only ever holds uppercase ASCII letters of bounded
        // length, so this conversion succeeds for any reachable state.
        let Ok(candidate) = Word::new(
            self.state.current_input.clone(),
            self.state.config.word_length,
        ) else {
            return SubmitOutcome::Ignored;
        };

        if !self.validator.is_acceptable(&candidate).await {
            return SubmitOutcome::InvalidWord;
        }

        self.state.record_guess(candidate);
        SubmitOutcome::Accepted
    }

    /// Abandon the current game and start a fresh one
    ///
    /// Fetches a new target and replaces the state wholesale: a new
    /// generation, not a patched-up copy of the old one. Permitted in any
    /// state.
    pub async fn reset(&mut self) {
        let target = self.source.fetch_word().await;
        debug_assert_eq!(target.len(), self.state.config.word_length);

        self.state = GameState::new(self.state.config, target);
    }

    /// Per-letter feedback for a completed row
    #[must_use]
    pub fn letter_statuses(&self, row: usize) -> Option<Vec<LetterStatus>> {
        self.state.letter_statuses(row)
    }

    /// Aggregated keyboard hint for one letter
    #[must_use]
    pub fn key_status(&self, letter: char) -> Option<LetterStatus> {
        self.state.key_status(letter)
    }
}

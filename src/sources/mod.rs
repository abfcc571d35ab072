//! Target word supply
//!
//! A `WordSource` hands out target words. The contract is total:
//! implementations always produce a word of the configured length, handling
//! failure internally (a remote source falls back to a local list) rather
//! than surfacing it to the game.

mod datamuse;

pub use datamuse::DatamuseSource;

use crate::core::Word;
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Supplies target words for new games
///
/// Implementations are shared across independent games and must be safe to
/// call concurrently.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Produce the next target word
    async fn fetch_word(&self) -> Word;
}

/// Error constructing a list-backed source with nothing to pick from
#[derive(Debug, Error)]
#[error("word list contains no words of the required length")]
pub struct EmptyWordList;

/// Uniform random pick from a fixed, non-empty word list
///
/// Used directly for offline play and as the fallback behind
/// [`DatamuseSource`].
pub struct ListSource {
    words: Vec<Word>,
}

impl ListSource {
    /// Wrap a list of candidate targets
    ///
    /// # Errors
    /// Returns [`EmptyWordList`] when the list is empty, since the source
    /// contract requires that a word can always be produced.
    pub fn new(words: Vec<Word>) -> Result<Self, EmptyWordList> {
        if words.is_empty() {
            return Err(EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Build from the embedded fallback list, filtered to `word_length`
    ///
    /// # Errors
    /// Returns [`EmptyWordList`] when no embedded word has the requested
    /// length.
    pub fn from_embedded(word_length: usize) -> Result<Self, EmptyWordList> {
        Self::new(crate::wordlists::fallback_words(word_length))
    }

    /// Number of candidate words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; empty lists are rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordSource for ListSource {
    async fn fetch_word(&self) -> Word {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .expect("list validated non-empty at construction")
    }
}

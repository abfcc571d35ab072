//! Word lists for the game
//!
//! Provides the embedded fallback list plus loading utilities for custom
//! lists.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK_COUNT, FALLBACK_WORDS};

use crate::core::Word;

/// Embedded fallback words of the requested length
///
/// Words of any other length are silently skipped, so the result can be
/// empty for lengths the embedded list does not cover.
#[must_use]
pub fn fallback_words(word_length: usize) -> Vec<Word> {
    loader::words_from_slice(FALLBACK_WORDS, word_length)
}

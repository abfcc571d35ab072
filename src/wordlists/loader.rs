//! Word list loading utilities
//!
//! Functions to load custom target-word lists from files or from embedded
//! constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file, one per line
///
/// Blank lines and entries that fail word validation (wrong length,
/// non-letters) are skipped rather than treated as errors.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_six::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt", 6).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed, word_length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector, skipping misfits
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, word_length).ok())
        .collect()
}

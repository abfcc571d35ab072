//! Game word representation
//!
//! A Word stores an uppercase word of the configured length along with letter
//! position indices for feedback queries.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase word of a fixed expected length
///
/// Stores the word as bytes and maintains a map of letter positions for
/// containment lookups. Both the target word and every recorded guess are
/// `Word`s, so length and character validity hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalized to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `expected_len`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_six::core::Word;
    ///
    /// let word = Word::new("garden", 6).unwrap();
    /// assert_eq!(word.text(), "GARDEN");
    ///
    /// assert!(Word::new("garden", 5).is_err());
    /// assert!(Word::new("gard3n", 6).is_err());
    /// ```
    pub fn new(text: impl Into<String>, expected_len: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.len() != expected_len {
            return Err(WordError::InvalidLength {
                expected: expected_len,
                actual: text.len(),
            });
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.as_bytes().to_vec();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the word has no letters (only possible with `expected_len` 0)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("GARDEN", 6).unwrap();
        assert_eq!(word.text(), "GARDEN");
        assert_eq!(word.chars(), b"GARDEN");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("garden", 6).unwrap();
        assert_eq!(word.text(), "GARDEN");

        let word2 = Word::new("GaRdEn", 6).unwrap();
        assert_eq!(word2.text(), "GARDEN");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 8
            })
        ));
        assert!(matches!(
            Word::new("short", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        ));
        assert!(matches!(
            Word::new("", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 0
            })
        ));
    }

    #[test]
    fn word_creation_other_lengths() {
        assert!(Word::new("crane", 5).is_ok());
        assert!(Word::new("ox", 2).is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("gard3n", 6).is_err()); // Number
        assert!(Word::new("gard n", 6).is_err()); // Space
        assert!(Word::new("gardn!", 6).is_err()); // Punctuation
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("python", 6).unwrap();
        assert_eq!(word.char_at(0), b'P');
        assert_eq!(word.char_at(3), b'H');
        assert_eq!(word.char_at(5), b'N');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("python", 6).unwrap();
        assert!(word.has_letter(b'P'));
        assert!(word.has_letter(b'N'));
        assert!(!word.has_letter(b'Z'));
        // Lookup is by uppercase byte
        assert!(!word.has_letter(b'p'));
    }

    #[test]
    fn word_positions_of() {
        let word = Word::new("puzzle", 6).unwrap();
        assert_eq!(word.positions_of(b'P'), &[0]);
        assert_eq!(word.positions_of(b'Z'), &[2, 3]);
        assert_eq!(word.positions_of(b'Q'), &[] as &[usize]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("bridge", 6).unwrap();
        assert_eq!(format!("{word}"), "BRIDGE");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("FROZEN", 6).unwrap();
        let word2 = Word::new("frozen", 6).unwrap();
        let word3 = Word::new("CASTLE", 6).unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}

//! Embedded fallback word list
//!
//! Local target words used whenever the dictionary service cannot supply
//! one.

/// Fallback target words, all six letters
pub const FALLBACK_WORDS: &[&str] = &[
    "PYTHON", "PUZZLE", "GALAXY", "JUNGLE", "WIZARD", "FROZEN", "CASTLE", "BRIDGE",
];

/// Number of embedded fallback words
pub const FALLBACK_COUNT: usize = 8;

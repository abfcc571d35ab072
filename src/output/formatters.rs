//! Formatting utilities for guess feedback

use crate::core::{LetterStatus, Word};
use colored::Colorize;

/// Render a status row as feedback emoji (🟩🟨⬜)
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Render a guess as colored letter tiles for the plain CLI mode
#[must_use]
pub fn colorize_guess(word: &Word, statuses: &[LetterStatus]) -> String {
    word.text()
        .chars()
        .zip(statuses)
        .map(|(letter, status)| {
            let tile = format!(" {letter} ");
            match status {
                LetterStatus::Correct => tile.black().on_green().to_string(),
                LetterStatus::Present => tile.black().on_yellow().to_string(),
                LetterStatus::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_row() {
        let statuses = [
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Absent,
        ];

        assert_eq!(statuses_to_emoji(&statuses), "🟩🟨⬜");
    }

    #[test]
    fn emoji_row_empty() {
        assert_eq!(statuses_to_emoji(&[]), "");
    }

    #[test]
    fn colorized_guess_contains_every_letter() {
        colored::control::set_override(false);

        let word = Word::new("PYTHON", 6).unwrap();
        let statuses = vec![LetterStatus::Correct; 6];
        let line = colorize_guess(&word, &statuses);

        for letter in "PYTHON".chars() {
            assert!(line.contains(letter), "missing {letter} in {line:?}");
        }
    }
}

//! Guess feedback scoring
//!
//! Per-letter feedback for a guess against the target word, and the
//! aggregated per-key status used for keyboard hints. All functions here are
//! pure and independently testable.

use super::Word;

/// Feedback classification for a single letter of a guess
///
/// The variant order encodes aggregation priority: `Correct` outranks
/// `Present`, which outranks `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter does not occur in the target at all
    Absent,
    /// Letter occurs in the target, but not at this position
    Present,
    /// Letter matches the target at this exact position
    Correct,
}

/// Score a single position of a guess against the target
///
/// Containment is checked per position without consuming letter counts: a
/// guess letter that occurs anywhere in the target scores `Present` at every
/// non-exact position, even when the guess repeats the letter more often
/// than the target holds it. That rule is part of the game's observable
/// behavior and is deliberately not the count-limited scoring used by other
/// word games.
///
/// # Panics
/// Panics if `position` is out of range for either word.
#[inline]
#[must_use]
pub fn letter_status(guess: &Word, target: &Word, position: usize) -> LetterStatus {
    let letter = guess.char_at(position);
    if letter == target.char_at(position) {
        LetterStatus::Correct
    } else if target.has_letter(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

/// Score a full guess against the target word
///
/// Returns one status per position, in order.
///
/// # Examples
/// ```
/// use wordle_six::core::{Word, score_guess, LetterStatus};
///
/// let target = Word::new("PYTHON", 6).unwrap();
/// let guess = Word::new("PYTHOM", 6).unwrap();
/// let statuses = score_guess(&guess, &target);
///
/// assert_eq!(statuses[0], LetterStatus::Correct);
/// assert_eq!(statuses[5], LetterStatus::Absent);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, target: &Word) -> Vec<LetterStatus> {
    (0..guess.len())
        .map(|i| letter_status(guess, target, i))
        .collect()
}

/// Aggregate the status of one keyboard letter across all recorded guesses
///
/// Every occurrence of `letter` in every guess contributes its score; the
/// best information wins (`Correct` > `Present` > `Absent`), regardless of
/// submission order. Returns `None` when the letter has not been guessed
/// yet.
#[must_use]
pub fn key_status(letter: u8, guesses: &[Word], target: &Word) -> Option<LetterStatus> {
    let mut best: Option<LetterStatus> = None;

    for guess in guesses {
        for &position in guess.positions_of(letter) {
            let status = letter_status(guess, target, position);
            best = Some(best.map_or(status, |current| current.max(status)));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    #[test]
    fn status_priority_ordering() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
    }

    #[test]
    fn score_exact_match_is_all_correct() {
        let target = word("PYTHON");
        let statuses = score_guess(&target.clone(), &target);
        assert!(statuses.iter().all(|&s| s == LetterStatus::Correct));
    }

    #[test]
    fn score_no_shared_letters_is_all_absent() {
        let target = word("PYTHON");
        let guess = word("CRUISE");
        let statuses = score_guess(&guess, &target);
        assert!(statuses.iter().all(|&s| s == LetterStatus::Absent));
    }

    #[test]
    fn score_correct_iff_positions_match() {
        let target = word("GARDEN");
        let guess = word("GOLDEN");

        let statuses = score_guess(&guess, &target);
        for (i, &status) in statuses.iter().enumerate() {
            assert_eq!(
                status == LetterStatus::Correct,
                guess.char_at(i) == target.char_at(i),
                "position {i}"
            );
        }
    }

    #[test]
    fn score_python_pythom() {
        let target = word("PYTHON");
        let guess = word("PYTHOM");

        assert_eq!(
            score_guess(&guess, &target),
            vec![
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn score_present_for_misplaced_letter() {
        let target = word("GARDEN");
        let guess = word("NUGGET");

        let statuses = score_guess(&guess, &target);
        // N occurs in GARDEN at position 5
        assert_eq!(statuses[0], LetterStatus::Present);
        // U does not occur
        assert_eq!(statuses[1], LetterStatus::Absent);
        // G occurs at position 0
        assert_eq!(statuses[2], LetterStatus::Present);
    }

    #[test]
    fn score_duplicates_not_count_limited() {
        // GARDEN holds a single A, yet both A's in the guess report a hit:
        // position 0 is Present (A exists elsewhere), position 1 is Correct.
        let target = word("GARDEN");
        let guess = word("AABCDE");

        assert_eq!(
            score_guess(&guess, &target),
            vec![
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Present,
            ]
        );
    }

    #[test]
    fn score_repeated_letter_present_everywhere() {
        // Every E in the guess scores against GARDEN's single E.
        let target = word("GARDEN");
        let guess = word("TEEPEE");

        let statuses = score_guess(&guess, &target);
        assert_eq!(statuses[1], LetterStatus::Present);
        assert_eq!(statuses[2], LetterStatus::Present);
        assert_eq!(statuses[4], LetterStatus::Correct); // E at target position 4
        assert_eq!(statuses[5], LetterStatus::Present);
    }

    #[test]
    fn key_status_unguessed_letter_is_none() {
        let target = word("PYTHON");
        let guesses = vec![word("GARDEN")];

        assert_eq!(key_status(b'Z', &guesses, &target), None);
        assert_eq!(key_status(b'Q', &[], &target), None);
    }

    #[test]
    fn key_status_absent_letter() {
        let target = word("PYTHON");
        let guesses = vec![word("GARDEN")];

        assert_eq!(
            key_status(b'A', &guesses, &target),
            Some(LetterStatus::Absent)
        );
    }

    #[test]
    fn key_status_correct_beats_present() {
        let target = word("PYTHON");
        // First guess has P misplaced, second has it in place; the key must
        // report the best information seen, not the most recent.
        let guesses = vec![word("OPENLY"), word("PARROT")];

        assert_eq!(
            key_status(b'P', &guesses, &target),
            Some(LetterStatus::Correct)
        );

        let reversed = vec![word("PARROT"), word("OPENLY")];
        assert_eq!(
            key_status(b'P', &reversed, &target),
            Some(LetterStatus::Correct)
        );
    }

    #[test]
    fn key_status_present_beats_absent() {
        let target = word("PYTHON");
        // Y misplaced in one guess, absent position in none; N absent vs present
        let guesses = vec![word("MAYHEM")];

        assert_eq!(
            key_status(b'Y', &guesses, &target),
            Some(LetterStatus::Present)
        );
        assert_eq!(
            key_status(b'M', &guesses, &target),
            Some(LetterStatus::Absent)
        );
    }

    #[test]
    fn key_status_combines_occurrences_within_one_guess() {
        let target = word("GARDEN");
        // Both A's of the guess score; the Correct occurrence must win.
        let guesses = vec![word("AABCDE")];

        assert_eq!(
            key_status(b'A', &guesses, &target),
            Some(LetterStatus::Correct)
        );
    }
}

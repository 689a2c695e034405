//! The puzzle board: one phrase and everything guessed against it.
//!
//! ## Guess resolution
//!
//! Input is uppercased, then classified:
//!
//! | input                         | outcome                                  |
//! |-------------------------------|------------------------------------------|
//! | empty, or already guessed     | `Invalid` (nothing recorded)             |
//! | one character                 | `LetterHit` / `FinalLetter` / `LetterMiss` |
//! | several characters            | `Solved` / `SolveMiss`                   |
//!
//! The masked display is derived from the phrase and the guessed set on every
//! call. Solved detection looks at the guessed set directly, so the mask
//! character may safely appear in a phrase.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outcome::GuessOutcome;
use crate::core::DEFAULT_MASK;

/// Board for one round.
///
/// `guessed` only ever grows, and only through [`Board::guess`].
/// Deserializing goes through [`Board::new`], so a loaded phrase and its
/// guesses are uppercased like a fresh board's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBoard")]
pub struct Board {
    phrase: String,
    guessed: OrdSet<String>,
    mask: char,
}

/// Board fields as they appear in serialized form.
#[derive(Deserialize)]
struct StoredBoard {
    phrase: String,
    guessed: OrdSet<String>,
    mask: char,
}

impl From<StoredBoard> for Board {
    fn from(stored: StoredBoard) -> Self {
        let mut board = Board::new(&stored.phrase).with_mask(stored.mask);
        board.guessed = stored.guessed.iter().map(|g| g.to_uppercase()).collect();
        board
    }
}

/// Uppercase form of a single character, as stored in the guessed set.
fn token(c: char) -> String {
    c.to_uppercase().collect()
}

impl Board {
    /// Create a board for `phrase` (uppercased) with the default mask.
    #[must_use]
    pub fn new(phrase: &str) -> Self {
        Self {
            phrase: phrase.to_uppercase(),
            guessed: OrdSet::new(),
            mask: DEFAULT_MASK,
        }
    }

    /// Use a different mask character.
    #[must_use]
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// The target phrase.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[must_use]
    pub fn mask(&self) -> char {
        self.mask
    }

    /// Every accepted guess so far, letters and solve attempts alike.
    #[must_use]
    pub fn guessed(&self) -> &OrdSet<String> {
        &self.guessed
    }

    /// Has this token (any case) already been guessed?
    #[must_use]
    pub fn has_guessed(&self, guess: &str) -> bool {
        self.guessed.contains(&guess.to_uppercase())
    }

    fn solved_outright(&self) -> bool {
        self.guessed.contains(&self.phrase)
    }

    fn is_revealed(&self, c: char) -> bool {
        !c.is_alphabetic() || self.guessed.contains(&token(c))
    }

    /// The phrase with every unguessed letter replaced by the mask.
    #[must_use]
    pub fn masked_phrase(&self) -> String {
        if self.solved_outright() {
            return self.phrase.clone();
        }
        self.phrase
            .chars()
            .map(|c| if self.is_revealed(c) { c } else { self.mask })
            .collect()
    }

    /// Number of positions still hidden.
    #[must_use]
    pub fn masked_count(&self) -> usize {
        if self.solved_outright() {
            return 0;
        }
        self.phrase.chars().filter(|&c| !self.is_revealed(c)).count()
    }

    /// Is every letter revealed, or the phrase solved outright?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.masked_count() == 0
    }

    /// Resolve a guess and record it.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let guess = input.to_uppercase();

        let outcome = if guess.is_empty() || self.guessed.contains(&guess) {
            GuessOutcome::Invalid
        } else if guess.chars().count() == 1 {
            let hidden_before = self.masked_count();
            self.guessed.insert(guess.clone());
            let found = (hidden_before - self.masked_count()) as u32;

            if self.is_solved() {
                GuessOutcome::FinalLetter { found }
            } else if found > 0 {
                GuessOutcome::LetterHit { found }
            } else {
                GuessOutcome::LetterMiss
            }
        } else {
            self.guessed.insert(guess.clone());
            if guess == self.phrase {
                GuessOutcome::Solved
            } else {
                GuessOutcome::SolveMiss
            }
        };

        debug!(guess = %guess, %outcome, "Guess resolved");
        outcome
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guesses: Vec<&str> = self.guessed.iter().map(String::as_str).collect();
        write!(
            f,
            "Here is what the board looks like so far: {}\nHere are all the guesses so far: [{}]",
            self.masked_phrase(),
            guesses.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_masks_letters_only() {
        let board = Board::new("Never graduate!");
        assert_eq!(board.phrase(), "NEVER GRADUATE!");
        assert_eq!(board.masked_phrase(), "***** ********!");
        assert_eq!(board.masked_count(), 13);
        assert!(board.guessed().is_empty());
    }

    #[test]
    fn test_custom_mask() {
        let board = Board::new("AB C").with_mask('_');
        assert_eq!(board.masked_phrase(), "__ _");
    }

    #[test]
    fn test_empty_guess_is_invalid() {
        let mut board = Board::new("NEVER GRADUATE!");
        assert_eq!(board.guess(""), GuessOutcome::Invalid);
        assert!(board.guessed().is_empty());
    }

    #[test]
    fn test_repeat_guess_is_invalid_in_any_case() {
        let mut board = Board::new("NEVER GRADUATE!");
        assert_eq!(board.guess("e").as_pair(), (3, false));
        assert_eq!(board.guess("e").as_pair(), (-1, false));
        assert_eq!(board.guess("E").as_pair(), (-1, false));
        assert_eq!(board.guessed().len(), 1);
    }

    #[test]
    fn test_letter_hit_and_miss() {
        let mut board = Board::new("NEVER GRADUATE!");
        assert_eq!(board.guess("a").as_pair(), (2, false));
        assert_eq!(board.guess("o").as_pair(), (0, false));
        assert_eq!(board.guess("o"), GuessOutcome::Invalid);
        assert_eq!(board.masked_phrase(), "***** **A**A**!");
    }

    #[test]
    fn test_final_letter_ends_round() {
        let mut board = Board::new("E. E. E.");
        assert_eq!(board.guess("e"), GuessOutcome::FinalLetter { found: 3 });
        assert!(board.is_solved());
        assert_eq!(board.masked_phrase(), "E. E. E.");
    }

    #[test]
    fn test_non_alphabetic_guess_reveals_nothing() {
        let mut board = Board::new("E. E. E.");
        assert_eq!(board.guess(".").as_pair(), (0, false));
        assert!(board.has_guessed("."));
    }

    #[test]
    fn test_solve_attempts() {
        let mut board = Board::new("EE, AEAO! EE.");
        assert_eq!(board.guess("never graduate!"), GuessOutcome::SolveMiss);
        assert!(!board.is_solved());

        assert_eq!(board.guess("ee, aeao! ee."), GuessOutcome::Solved);
        assert!(board.is_solved());
        assert_eq!(board.masked_phrase(), "EE, AEAO! EE.");
    }

    #[test]
    fn test_repeated_wrong_solve_is_invalid() {
        let mut board = Board::new("NEVER GRADUATE!");
        assert_eq!(board.guess("never ever"), GuessOutcome::SolveMiss);
        assert_eq!(board.guess("NEVER EVER"), GuessOutcome::Invalid);
    }

    #[test]
    fn test_mask_character_inside_phrase() {
        let mut board = Board::new("A*B");
        assert_eq!(board.masked_phrase(), "***");
        board.guess("a");
        assert!(!board.is_solved());
        assert_eq!(board.guess("b"), GuessOutcome::FinalLetter { found: 1 });
    }

    #[test]
    fn test_display() {
        let mut board = Board::new("NEVER GRADUATE!");
        board.guess("z");
        board.guess("a");
        assert_eq!(
            board.to_string(),
            "Here is what the board looks like so far: ***** **A**A**!\n\
             Here are all the guesses so far: [A, Z]"
        );
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut board = Board::new("NEVER GRADUATE!");
        board.guess("e");
        let snapshot = board.clone();
        board.guess("r");

        assert_eq!(snapshot.guessed().len(), 1);
        assert_eq!(board.guessed().len(), 2);
    }

    #[test]
    fn test_blank_phrase_ends_on_first_letter() {
        let mut board = Board::new("");
        assert!(board.is_solved());
        assert_eq!(board.guess("a"), GuessOutcome::FinalLetter { found: 0 });
        assert_eq!(board.guess("a").as_pair(), (-1, false));
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new("NEVER GRADUATE!").with_mask('_');
        board.guess("e");
        board.guess("never ever");

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_uppercases_phrase_and_guesses() {
        let mut board: Board =
            serde_json::from_str(r#"{"phrase":"never","guessed":["x"],"mask":"*"}"#).unwrap();

        assert_eq!(board.phrase(), "NEVER");
        assert!(board.has_guessed("X"));
        assert_eq!(board.guess("x"), GuessOutcome::Invalid);
        assert_eq!(board.guess("never").as_pair(), (0, true));
        assert!(board.is_solved());
    }
}

//! Result of resolving one guess against the board.

use serde::{Deserialize, Serialize};

/// How a guess resolved.
///
/// The six classes collapse onto the `(count_found, round_over)` pair returned
/// by [`GuessOutcome::as_pair`]. `LetterMiss` and `SolveMiss` share the pair
/// `(0, false)`: the turn passes either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Empty or repeated guess. Nothing changed; ask again.
    Invalid,
    /// Single letter revealed `found` positions; the board is still open.
    LetterHit { found: u32 },
    /// Single letter that revealed the last hidden positions.
    FinalLetter { found: u32 },
    /// Single letter with no hidden matches.
    LetterMiss,
    /// Wrong full-phrase solve.
    SolveMiss,
    /// Exact full-phrase solve.
    Solved,
}

impl GuessOutcome {
    /// Positions revealed: `-1` for an invalid guess, otherwise 0 or more.
    #[must_use]
    pub fn count_found(self) -> i32 {
        match self {
            GuessOutcome::Invalid => -1,
            GuessOutcome::LetterHit { found } | GuessOutcome::FinalLetter { found } => {
                i32::try_from(found).unwrap_or(i32::MAX)
            }
            GuessOutcome::LetterMiss | GuessOutcome::SolveMiss | GuessOutcome::Solved => 0,
        }
    }

    /// Did this guess finish the board?
    #[must_use]
    pub fn round_over(self) -> bool {
        matches!(self, GuessOutcome::FinalLetter { .. } | GuessOutcome::Solved)
    }

    /// Was the guess rejected without consuming the turn?
    #[must_use]
    pub fn is_invalid(self) -> bool {
        self == GuessOutcome::Invalid
    }

    /// Letters revealed, as an unsigned count (0 for invalid guesses and solves).
    #[must_use]
    pub fn letters_revealed(self) -> u32 {
        match self {
            GuessOutcome::LetterHit { found } | GuessOutcome::FinalLetter { found } => found,
            _ => 0,
        }
    }

    /// The `(count_found, round_over)` pair.
    ///
    /// ```
    /// use phrase_wheel::board::GuessOutcome;
    ///
    /// assert_eq!(GuessOutcome::Invalid.as_pair(), (-1, false));
    /// assert_eq!(GuessOutcome::FinalLetter { found: 3 }.as_pair(), (3, true));
    /// assert_eq!(GuessOutcome::Solved.as_pair(), (0, true));
    /// ```
    #[must_use]
    pub fn as_pair(self) -> (i32, bool) {
        (self.count_found(), self.round_over())
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessOutcome::Invalid => write!(f, "invalid guess"),
            GuessOutcome::LetterHit { found } => write!(f, "{} found", found),
            GuessOutcome::FinalLetter { found } => write!(f, "{} found, board solved", found),
            GuessOutcome::LetterMiss => write!(f, "no match"),
            GuessOutcome::SolveMiss => write!(f, "wrong solve"),
            GuessOutcome::Solved => write!(f, "solved"),
        }
    }
}

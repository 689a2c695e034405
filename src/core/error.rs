//! Engine error type.
//!
//! Normal play never fails: an invalid guess is an ordinary outcome, not an
//! error. `GameError` covers configuration mistakes rejected at construction,
//! calls made in the wrong turn phase, and a guess source that has gone away.

use derive_more::{Display, Error};

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A round was set up without any players.
    #[display("a round needs at least 1 player")]
    NoPlayers,

    /// More players than seat IDs can address.
    #[display("too many players: {count} (at most 255 supported)")]
    TooManyPlayers {
        /// Number of players requested.
        count: usize,
    },

    /// The phrase corpus has no phrases to choose from.
    #[display("the phrase corpus is empty")]
    EmptyCorpus,

    /// A wheel table that can never produce a multiplier.
    #[display("invalid wheel: {reason}")]
    InvalidWheel {
        /// What is wrong with the table.
        reason: &'static str,
    },

    /// An engine operation was called in the wrong turn phase.
    #[display("expected phase {expected}, but the round is in {actual}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: &'static str,
        /// Phase the round is actually in.
        actual: &'static str,
    },

    /// The round has already been won.
    #[display("the round is already over")]
    RoundFinished,

    /// The guess source stopped producing guesses mid-round.
    #[display("guess source closed while waiting on {player}")]
    GuessSourceClosed {
        /// Name of the player who was asked to guess.
        player: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GameError::NoPlayers.to_string(), "a round needs at least 1 player");
        assert_eq!(
            GameError::TooManyPlayers { count: 300 }.to_string(),
            "too many players: 300 (at most 255 supported)"
        );
        assert_eq!(
            GameError::WrongPhase { expected: "AwaitingGuess", actual: "AwaitingSpin" }.to_string(),
            "expected phase AwaitingGuess, but the round is in AwaitingSpin"
        );
        assert_eq!(
            GameError::GuessSourceClosed { player: "Ed".into() }.to_string(),
            "guess source closed while waiting on Ed"
        );
    }

    #[test]
    fn test_is_std_error() {
        use std::error::Error;

        let err: Box<dyn Error> = Box::new(GameError::EmptyCorpus);
        assert!(err.source().is_none());
    }
}

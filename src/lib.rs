//! # phrase-wheel
//!
//! A turn-based phrase-guessing game engine for two or more players.
//!
//! Players take turns spinning a weighted wheel for a point multiplier, then
//! guess a letter or the whole phrase. Each revealed letter is worth the
//! multiplier; a correct letter earns another spin, and revealing the last
//! letter or solving the phrase outright wins the round.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: Input and display are collaborators behind traits
//!    (`GuessSource`, `DisplaySink`). The engine never touches a console.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`.
//!    Same seed, same seating, phrases and spins.
//!
//! 3. **Derived state**: The masked phrase and the current player are
//!    computed, never stored alongside the data they come from.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `wheel`: Weighted spinner and the `Wheel` trait
//! - `board`: Phrase corpus, puzzle board, guess outcomes
//! - `stats`: Per-round and lifetime player statistics
//! - `rules`: Round engine, multi-round table, collaborator traits
//!
//! ## Example
//!
//! ```
//! use phrase_wheel::{GameConfig, GameTable, PhraseCorpus, ScriptedGuesses, ScriptedWheel};
//!
//! let corpus = PhraseCorpus::new(["E. E. E."]).unwrap();
//! let mut table = GameTable::new(GameConfig::default(), corpus);
//! table.seat_players(["Ada"]);
//!
//! let result = table
//!     .play_round(&mut ScriptedWheel::always(2), &mut ScriptedGuesses::new(["e"]), &mut ())
//!     .unwrap();
//!
//! assert_eq!(result.winner_name, "Ada");
//! assert_eq!(result.winning_score, 6);
//! assert_eq!(table.player("Ada").unwrap().total_winnings(), 6);
//! ```

pub mod core;
pub mod wheel;
pub mod board;
pub mod stats;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};

pub use crate::wheel::{Multiplier, ScriptedWheel, Spinner, Wheel, WheelSegment};

pub use crate::board::{Board, GuessOutcome, PhraseCorpus};

pub use crate::stats::{LifetimeStats, PlayerRecord, RoundStats};

pub use crate::rules::{
    DisplaySink, GameTable, GuessSource, RoundEngine, RoundResult, ScriptedGuesses, Transcript,
    TurnPhase, TurnRecord, TurnResolution,
};

//! Round rules: the turn state machine and the session around it.
//!
//! - `RoundEngine`: spins, guesses, scoring and settlement for one round
//! - `GameTable`: corpus and lifetime records carried across rounds
//! - `GuessSource` / `DisplaySink`: the input and output boundaries
//!
//! The engine calls into the collaborators but never reads a console or
//! renders a screen itself.

pub mod engine;
pub mod collaborators;
pub mod table;

pub use engine::{RoundEngine, RoundResult, TurnPhase, TurnRecord, TurnResolution};
pub use collaborators::{DisplaySink, GuessSource, ScriptedGuesses, Transcript};
pub use table::GameTable;

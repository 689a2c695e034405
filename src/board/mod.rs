//! Puzzle board and phrase corpus.
//!
//! - `PhraseCorpus`: shared, deduplicated phrase list
//! - `Board`: one round's phrase, guesses and masked display
//! - `GuessOutcome`: how a single guess resolved

mod corpus;
mod outcome;
mod puzzle;

pub use corpus::{PhraseCorpus, STANDARD_PHRASES};
pub use outcome::GuessOutcome;
pub use puzzle::Board;

//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares. Nothing in here
//! knows about phrases, wheels or scoring.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_MASK};
pub use error::GameError;

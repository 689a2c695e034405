//! The prize wheel.
//!
//! - `Spinner`: weighted wheel over a table of segments
//! - `Wheel`: the trait a round spins through
//! - `ScriptedWheel`: fixed multiplier sequence for replays and tests

mod spinner;

pub use spinner::{Multiplier, ScriptedWheel, Spinner, Wheel, WheelSegment, STANDARD_WHEEL};

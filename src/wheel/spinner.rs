//! Weighted wheel spins.
//!
//! A spin yields a [`Multiplier`]: the points each revealed letter is worth
//! this turn. A multiplier of zero loses the turn outright.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{GameError, GameRng};

/// Per-letter score factor produced by a spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Multiplier(pub u8);

impl Multiplier {
    /// The "lose a turn" segment.
    pub const LOSE_TURN: Multiplier = Multiplier(0);

    /// Create a new multiplier.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw multiplier value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Does this spin end the turn without a guess?
    #[must_use]
    pub const fn is_lose_turn(self) -> bool {
        self.0 == 0
    }

    /// Points earned for revealing `letters` letters at this multiplier.
    #[must_use]
    pub fn points_for(self, letters: u32) -> u32 {
        letters * u32::from(self.0)
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// One slice of the wheel: a multiplier and its relative weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub multiplier: Multiplier,
    pub weight: u32,
}

impl WheelSegment {
    #[must_use]
    pub const fn new(multiplier: u8, weight: u32) -> Self {
        Self {
            multiplier: Multiplier(multiplier),
            weight,
        }
    }
}

/// Standard wheel, weights out of 100.
pub const STANDARD_WHEEL: [WheelSegment; 6] = [
    WheelSegment::new(0, 25),
    WheelSegment::new(1, 50),
    WheelSegment::new(2, 13),
    WheelSegment::new(3, 6),
    WheelSegment::new(5, 5),
    WheelSegment::new(8, 1),
];

/// Source of spins for a round.
///
/// The engine spins through this trait so tests and replays can fix the
/// sequence of multipliers.
pub trait Wheel {
    /// Spin once.
    fn spin(&mut self, rng: &mut GameRng) -> Multiplier;
}

/// Weighted wheel drawing from a table of segments.
///
/// Holds no state beyond its table; every spin draws fresh from the RNG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spinner {
    segments: Vec<WheelSegment>,
    weights: Vec<u32>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::standard()
    }
}

impl Spinner {
    /// The standard wheel ([`STANDARD_WHEEL`]).
    #[must_use]
    pub fn standard() -> Self {
        Self::from_segments(STANDARD_WHEEL.to_vec())
    }

    /// Build a wheel from custom segments.
    ///
    /// Rejects an empty table or one whose weights sum to zero.
    pub fn new(segments: Vec<WheelSegment>) -> Result<Self, GameError> {
        if segments.is_empty() {
            return Err(GameError::InvalidWheel { reason: "no segments" });
        }
        match segments.iter().try_fold(0u32, |total, s| total.checked_add(s.weight)) {
            None => return Err(GameError::InvalidWheel { reason: "total weight overflows" }),
            Some(0) => return Err(GameError::InvalidWheel { reason: "total weight is zero" }),
            Some(_) => {}
        }
        Ok(Self::from_segments(segments))
    }

    fn from_segments(segments: Vec<WheelSegment>) -> Self {
        let weights = segments.iter().map(|s| s.weight).collect();
        Self { segments, weights }
    }

    /// The segments of this wheel.
    #[must_use]
    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    /// Sum of all segment weights.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Draw one multiplier.
    pub fn spin(&self, rng: &mut GameRng) -> Multiplier {
        // Construction guarantees a non-zero total, so a slot is always drawn
        let multiplier = rng
            .choose_weighted(&self.weights)
            .map_or(Multiplier::LOSE_TURN, |i| self.segments[i].multiplier);
        trace!(%multiplier, "Wheel spun");
        multiplier
    }
}

impl Wheel for Spinner {
    fn spin(&mut self, rng: &mut GameRng) -> Multiplier {
        Spinner::spin(self, rng)
    }
}

/// Wheel that replays a fixed cycle of multipliers.
///
/// Ignores the RNG. An empty script always lands on `x1`.
///
/// ```
/// use phrase_wheel::core::GameRng;
/// use phrase_wheel::wheel::{Multiplier, ScriptedWheel, Wheel};
///
/// let mut rng = GameRng::new(0);
/// let mut wheel = ScriptedWheel::new([0, 2]);
/// assert_eq!(wheel.spin(&mut rng), Multiplier::LOSE_TURN);
/// assert_eq!(wheel.spin(&mut rng), Multiplier::new(2));
/// assert_eq!(wheel.spin(&mut rng), Multiplier::LOSE_TURN);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedWheel {
    script: Vec<Multiplier>,
    next: usize,
}

impl ScriptedWheel {
    pub fn new(script: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: script.into_iter().map(Multiplier).collect(),
            next: 0,
        }
    }

    /// A wheel that always lands on `value`.
    #[must_use]
    pub fn always(value: u8) -> Self {
        Self::new([value])
    }
}

impl Wheel for ScriptedWheel {
    fn spin(&mut self, _rng: &mut GameRng) -> Multiplier {
        if self.script.is_empty() {
            return Multiplier(1);
        }
        let multiplier = self.script[self.next % self.script.len()];
        self.next += 1;
        multiplier
    }
}

//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players. A seat is a player's
//! position in the turn order fixed at the start of a round.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::GameError;

/// Most seats a round can hold.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Seat identifier supporting 1-255 players.
///
/// Seat indices are 0-based: the first player to act is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts on turn `turn` in a rotation of `player_count` seats.
    ///
    /// ```
    /// use phrase_wheel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0, 3), PlayerId::new(0));
    /// assert_eq!(PlayerId::for_turn(4, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn for_turn(turn: u64, player_count: usize) -> Self {
        debug_assert!(player_count > 0 && player_count <= MAX_PLAYERS);
        Self((turn % player_count as u64) as u8)
    }

    /// Iterate over all seat IDs for a round with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Always holds between 1 and [`MAX_PLAYERS`] entries, so every
/// `PlayerId::for_turn` result indexes a live seat.
///
/// ## Example
///
/// ```
/// use phrase_wheel::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::from_vec(vec![0, 0, 0]).unwrap();
/// scores[PlayerId::new(1)] = 15;
/// assert_eq!(scores[PlayerId::new(1)], 15);
/// assert_eq!(scores.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a seat table from entries in seat order.
    pub fn from_vec(data: Vec<T>) -> Result<Self, GameError> {
        match data.len() {
            0 => Err(GameError::NoPlayers),
            count if count > MAX_PLAYERS => Err(GameError::TooManyPlayers { count }),
            _ => Ok(Self { data }),
        }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Entries in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the table, returning entries in seat order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

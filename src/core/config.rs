//! Game configuration.
//!
//! A `GameConfig` is handed to every round and table at construction. It
//! carries the settings that stay fixed for a whole session: the RNG seed and
//! the character used to hide unguessed letters.

use serde::{Deserialize, Serialize};

/// Default character shown in place of an unguessed letter.
pub const DEFAULT_MASK: char = '*';

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Random seed. Same seed produces the same seating, phrases and spins.
    pub seed: u64,

    /// Character shown in place of an unguessed letter.
    ///
    /// Solved detection never compares against the masked string, so any
    /// character works, even one that appears in a phrase.
    pub mask: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mask: DEFAULT_MASK,
        }
    }
}

impl GameConfig {
    /// Create a config with the given seed and default settings otherwise.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the mask character.
    #[must_use]
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.mask, '*');
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(7).with_mask('_');
        assert_eq!(config.seed, 7);
        assert_eq!(config.mask, '_');

        let reseeded = config.with_seed(9);
        assert_eq!(reseeded.seed, 9);
        assert_eq!(reseeded.mask, '_');
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(123).with_mask('#');
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

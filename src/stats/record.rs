//! Per-player statistics.
//!
//! A `PlayerRecord` carries two tiers of counters:
//!
//! - `RoundStats`: score and guess counts for the round in progress, zeroed
//!   when a round starts
//! - `LifetimeStats`: totals across every round played, which only grow
//!
//! At the end of a round [`PlayerRecord::fold_round_into_lifetime`] merges the
//! round tier into the lifetime tier.

use serde::{Deserialize, Serialize};

/// Counters for the round in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub score: u32,
    /// Every spin-and-guess that consumed a turn, including lost turns.
    pub guesses: u32,
    pub correct_guesses: u32,
}

/// Totals across all rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_winnings: u64,
    pub total_guesses: u64,
    pub total_correct_guesses: u64,
}

/// A player's identity and statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    name: String,
    lifetime: LifetimeStats,
    round: RoundStats,
}

impl PlayerRecord {
    /// A new player with no history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lifetime: LifetimeStats::default(),
            round: RoundStats::default(),
        }
    }

    /// A returning player whose record was kept elsewhere.
    pub fn with_history(
        name: impl Into<String>,
        games_played: u32,
        games_won: u32,
        total_winnings: u64,
    ) -> Self {
        Self {
            name: name.into(),
            lifetime: LifetimeStats {
                games_played,
                games_won,
                total_winnings,
                ..LifetimeStats::default()
            },
            round: RoundStats::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lifetime(&self) -> &LifetimeStats {
        &self.lifetime
    }

    #[must_use]
    pub fn round(&self) -> &RoundStats {
        &self.round
    }

    // === Lifetime ===

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.lifetime.games_played
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.lifetime.games_won
    }

    /// Rounds played but not won.
    #[must_use]
    pub fn games_lost(&self) -> u32 {
        self.lifetime.games_played.saturating_sub(self.lifetime.games_won)
    }

    #[must_use]
    pub fn total_winnings(&self) -> u64 {
        self.lifetime.total_winnings
    }

    #[must_use]
    pub fn total_guesses(&self) -> u64 {
        self.lifetime.total_guesses
    }

    #[must_use]
    pub fn total_correct_guesses(&self) -> u64 {
        self.lifetime.total_correct_guesses
    }

    /// Credit winnings earned outside a settled round.
    pub fn add_winnings(&mut self, amount: u64) -> u64 {
        self.lifetime.total_winnings += amount;
        self.lifetime.total_winnings
    }

    // === Current round ===

    #[must_use]
    pub fn score(&self) -> u32 {
        self.round.score
    }

    #[must_use]
    pub fn guesses(&self) -> u32 {
        self.round.guesses
    }

    #[must_use]
    pub fn correct_guesses(&self) -> u32 {
        self.round.correct_guesses
    }

    /// Count one turn-consuming guess (a lost turn counts too).
    pub fn record_guess(&mut self) -> u32 {
        self.round.guesses += 1;
        self.round.guesses
    }

    pub fn record_correct_guess(&mut self) -> u32 {
        self.round.correct_guesses += 1;
        self.round.correct_guesses
    }

    pub fn add_score(&mut self, points: u32) -> u32 {
        self.round.score += points;
        self.round.score
    }

    /// Zero the round counters.
    pub fn reset_round(&mut self) {
        self.round = RoundStats::default();
    }

    /// Merge the round counters into the lifetime totals.
    ///
    /// Only the winner banks the round score.
    pub fn fold_round_into_lifetime(&mut self, won: bool) {
        self.lifetime.games_played += 1;
        self.lifetime.total_guesses += u64::from(self.round.guesses);
        self.lifetime.total_correct_guesses += u64::from(self.round.correct_guesses);

        if won {
            self.lifetime.games_won += 1;
            self.lifetime.total_winnings += u64::from(self.round.score);
        }
    }
}

impl std::fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "My name is {}. I have guessed {} total times and got {} guesses correctly in the {} games I played. \
             My win-loss record is: {} Wins and {} Losses. My total winnings is {}.",
            self.name,
            self.lifetime.total_guesses,
            self.lifetime.total_correct_guesses,
            self.lifetime.games_played,
            self.lifetime.games_won,
            self.games_lost(),
            self.lifetime.total_winnings,
        )
    }
}

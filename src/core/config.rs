//! Game configuration.

use serde::{Deserialize, Serialize};

/// Configuration for dealing a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs in the deck. Must be at least 1.
    pub pair_count: usize,

    /// Seed for the shuffle RNG.
    /// Same seed produces the same deal.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 6,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a config for the given number of pairs.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cards a deck built from this config holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pair_count * 2
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Random topology configuration loaded from environment variables.

/// Default number of randomizing rounds.
pub const DEFAULT_ROUNDS: usize = 5;

/// Configuration for [`RandomTopology`](crate::RandomTopology).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomConfig {
    /// Number of rounds; each round adds two random sets, their union and
    /// their intersection.
    pub rounds: usize,
    /// Seed for a reproducible generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Load configuration from environment variables.
    ///
    /// * `FOM_RANDOM_ROUNDS`: number of rounds (default 5).
    /// * `FOM_RANDOM_SEED`: optional `u64` seed.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("FOM_RANDOM_ROUNDS").ok().as_deref(),
            std::env::var("FOM_RANDOM_SEED").ok().as_deref(),
        )
    }

    fn from_vars(rounds: Option<&str>, seed: Option<&str>) -> Self {
        Self {
            rounds: rounds
                .and_then(|r| r.trim().parse().ok())
                .unwrap_or(DEFAULT_ROUNDS),
            seed: seed.and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Replaces the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Fixes the seed, making generation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed: None,
        }
    }
}

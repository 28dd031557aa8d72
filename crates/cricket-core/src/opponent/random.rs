//! Uniformly random opponent.

use super::traits::MoveSource;
use crate::rules::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks each move with equal probability
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Create an opponent seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an opponent with a fixed seed, for reproducible matches
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomOpponent {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

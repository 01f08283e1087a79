//! Dice pools, hit thresholds, and rolling.
//!
//! Everything rolls d6. A die at or above the hit threshold is a hit;
//! the threshold is 5 normally and 4 when Edge is active. Rolls keep
//! their face values in order so glitch detection can inspect them.

pub mod glitch;
pub mod roll;

pub use glitch::GlitchStatus;
pub use roll::RollResult;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Number of faces on the dice. Anarchy rolls d6 only.
pub const DIE_SIDES: u8 = 6;

/// The hit threshold a pool is rolled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Threshold {
    /// Standard rolls: a die hits on 5 or 6.
    #[default]
    Normal,
    /// Edge is active: a die hits on 4, 5, or 6.
    Edge,
}

impl Threshold {
    /// The lowest face value that counts as a hit.
    pub fn min_hit(self) -> u8 {
        match self {
            Self::Normal => 5,
            Self::Edge => 4,
        }
    }

    /// Threshold for a roll, given whether Edge is active.
    pub fn from_edge(edge: bool) -> Self {
        if edge { Self::Edge } else { Self::Normal }
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+", self.min_hit())
    }
}

/// A pool of d6 to roll together for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DicePool {
    /// How many dice to roll. Zero is a valid, empty pool.
    pub size: u32,
}

impl DicePool {
    /// Create a pool of the given size.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Roll every die in the pool using the given RNG.
    pub fn roll(&self, threshold: Threshold, rng: &mut StdRng) -> RollResult {
        let values = (0..self.size)
            .map(|_| rng.random_range(1..=DIE_SIDES))
            .collect();
        RollResult::from_values(values, threshold)
    }
}

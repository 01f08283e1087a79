//! Roll results and Edge rerolls.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::glitch::GlitchStatus;
use super::{DIE_SIDES, Threshold};

/// The result of rolling a dice pool: face values in roll order, plus the
/// threshold the roll was made under.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollResult {
    values: Vec<u8>,
    threshold: Threshold,
}

impl RollResult {
    /// Build a result from already-rolled face values.
    pub fn from_values(values: Vec<u8>, threshold: Threshold) -> Self {
        Self { values, threshold }
    }

    /// The face values, in the order the dice were rolled.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The threshold this roll was made under.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Count of dice at or above the hit threshold.
    pub fn hits(&self) -> u32 {
        let min = self.threshold.min_hit();
        self.values.iter().filter(|&&v| v >= min).count() as u32
    }

    /// Count of dice showing 1.
    pub fn ones(&self) -> u32 {
        self.values.iter().filter(|&&v| v == 1).count() as u32
    }

    /// Number of dice rolled.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Glitch classification for this roll.
    pub fn glitch_status(&self) -> GlitchStatus {
        GlitchStatus::detect(&self.values, self.hits())
    }

    /// Reroll every die that failed, keeping every die that hit.
    ///
    /// Models spending Edge to retry failures: dice already at or above
    /// the threshold are kept unchanged, so prior hits never regress.
    /// The new result has the same length and threshold, with hits
    /// recounted over the new faces.
    pub fn reroll_failures(&self, rng: &mut StdRng) -> RollResult {
        let min = self.threshold.min_hit();
        let values = self
            .values
            .iter()
            .map(|&v| {
                if v >= min {
                    v
                } else {
                    rng.random_range(1..=DIE_SIDES)
                }
            })
            .collect();
        Self {
            values,
            threshold: self.threshold,
        }
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        let hits = self.hits();
        write!(
            f,
            "[{}] = {} hit{}",
            faces.join(", "),
            hits,
            if hits == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn hits_counted_against_threshold() {
        let r = RollResult::from_values(vec![5, 2, 6, 1], Threshold::Normal);
        assert_eq!(r.hits(), 2);
        let r = RollResult::from_values(vec![5, 2, 6, 4], Threshold::Edge);
        assert_eq!(r.hits(), 3);
    }

    #[test]
    fn ones_counted() {
        let r = RollResult::from_values(vec![1, 1, 3, 6], Threshold::Normal);
        assert_eq!(r.ones(), 2);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert!(r.is_empty());
        assert_eq!(r.hits(), 0);
        assert_eq!(r.ones(), 0);
    }

    #[test]
    fn reroll_keeps_hits_and_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = RollResult::from_values(vec![5, 2, 6, 1], Threshold::Normal);
        let rerolled = r.reroll_failures(&mut rng);

        assert_eq!(rerolled.len(), 4);
        // Positions 0 and 2 already hit and must be untouched.
        assert_eq!(rerolled.values()[0], 5);
        assert_eq!(rerolled.values()[2], 6);
        assert!(rerolled.hits() >= 2);
        for value in rerolled.values() {
            assert!((1..=DIE_SIDES).contains(value));
        }
    }

    #[test]
    fn reroll_uses_roll_threshold() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = RollResult::from_values(vec![4, 3], Threshold::Edge);
        let rerolled = r.reroll_failures(&mut rng);
        // Under Edge the 4 is a hit and is kept.
        assert_eq!(rerolled.values()[0], 4);
        assert_eq!(rerolled.threshold(), Threshold::Edge);
    }

    #[test]
    fn reroll_all_hits_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let r = RollResult::from_values(vec![5, 6, 5], Threshold::Normal);
        assert_eq!(r.reroll_failures(&mut rng), r);
    }

    #[test]
    fn display() {
        let r = RollResult::from_values(vec![5, 2, 6, 1], Threshold::Normal);
        assert_eq!(r.to_string(), "[5, 2, 6, 1] = 2 hits");
        let r = RollResult::from_values(vec![5, 2], Threshold::Normal);
        assert_eq!(r.to_string(), "[5, 2] = 1 hit");
    }
}

//! Condition monitor: bounded damage and healing with status derivation.

use serde::{Deserialize, Serialize};

/// A character's remaining health/stun capacity, bounded by a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMonitor {
    /// Remaining capacity.
    pub current: u32,
    /// Upper bound for healing.
    pub max: u32,
}

/// Derived status after damage resolution. Not stored anywhere; callers
/// recompute it from the monitor and the overflow amount they observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    /// The monitor still has capacity.
    Ok,
    /// Monitor emptied and damage exceeded it.
    Unconscious,
    /// Monitor emptied exactly, with no excess damage.
    Overflow,
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Unconscious => write!(f, "unconscious"),
            Self::Overflow => write!(f, "overflow"),
        }
    }
}

impl ConditionMonitor {
    /// Create a full monitor with the given capacity.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Create a monitor at a specific level, clamped to the capacity.
    pub fn at(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Apply damage, flooring the monitor at zero.
    ///
    /// Returns the overflow: how far the damage exceeded the remaining
    /// capacity. Pass that amount to [`ConditionMonitor::status`] to
    /// classify the character's state.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        let overflow = damage.saturating_sub(self.current);
        self.current = self.current.saturating_sub(damage);
        overflow
    }

    /// Apply healing, capped at the maximum. Excess healing is discarded.
    pub fn heal(&mut self, healing: u32) {
        self.current = self.current.saturating_add(healing).min(self.max);
    }

    /// Classify the character's state after damage.
    ///
    /// Precedence matters: a positive monitor is always `Ok` regardless
    /// of overflow; an emptied monitor is `Unconscious` only when damage
    /// actually exceeded capacity, and a plain knockout (`Overflow`)
    /// otherwise.
    pub fn status(&self, overflow: u32) -> ConditionStatus {
        if self.current > 0 {
            ConditionStatus::Ok
        } else if overflow > 0 {
            ConditionStatus::Unconscious
        } else {
            ConditionStatus::Overflow
        }
    }

    /// Whether the monitor is emptied.
    pub fn is_down(&self) -> bool {
        self.current == 0
    }
}

impl std::fmt::Display for ConditionMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

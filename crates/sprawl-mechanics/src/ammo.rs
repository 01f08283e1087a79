//! Ammunition tracking.

use serde::{Deserialize, Serialize};

/// Magazine state after firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoState {
    /// Rounds left in the magazine.
    pub ammo_left: u32,
    /// True exactly when the magazine is empty.
    pub needs_reload: bool,
}

/// Decrement ammo for shots fired and report whether a reload is due.
///
/// Ammo never goes below zero; firing more shots than remain simply
/// empties the magazine. `magazine_size` is reserved for reload-capacity
/// validation and currently has no effect on the result.
pub fn track_ammo(current_ammo: u32, shots_fired: u32, magazine_size: u32) -> AmmoState {
    let _ = magazine_size;
    let ammo_left = current_ammo.saturating_sub(shots_fired);
    AmmoState {
        ammo_left,
        needs_reload: ammo_left == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firing_decrements_ammo() {
        let state = track_ammo(10, 2, 10);
        assert_eq!(state.ammo_left, 8);
        assert!(!state.needs_reload);
    }

    #[test]
    fn overfiring_empties_the_magazine() {
        let state = track_ammo(3, 5, 10);
        assert_eq!(state.ammo_left, 0);
        assert!(state.needs_reload);
    }

    #[test]
    fn exactly_empty_needs_reload() {
        let state = track_ammo(4, 4, 10);
        assert_eq!(state.ammo_left, 0);
        assert!(state.needs_reload);
    }

    #[test]
    fn magazine_size_has_no_effect() {
        // Reserved parameter: the result must not depend on it.
        assert_eq!(track_ammo(6, 2, 1), track_ammo(6, 2, 100));
    }
}

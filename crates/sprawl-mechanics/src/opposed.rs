//! Opposed test resolution.

use serde::{Deserialize, Serialize};

/// Who won an opposed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpposedResult {
    /// The attacker scored more hits.
    Attacker,
    /// The defender scored more hits.
    Defender,
    /// Equal hits on both sides.
    Tie,
}

impl std::fmt::Display for OpposedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attacker => write!(f, "attacker"),
            Self::Defender => write!(f, "defender"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// Resolve an opposed test from both sides' hit counts.
///
/// Strict comparison with ties preserved; used uniformly for combat,
/// stealth, hacking, or any other opposed action.
pub fn resolve_opposed(attacker_hits: u32, defender_hits: u32) -> OpposedResult {
    match attacker_hits.cmp(&defender_hits) {
        std::cmp::Ordering::Greater => OpposedResult::Attacker,
        std::cmp::Ordering::Less => OpposedResult::Defender,
        std::cmp::Ordering::Equal => OpposedResult::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacker_wins() {
        assert_eq!(resolve_opposed(4, 2), OpposedResult::Attacker);
    }

    #[test]
    fn defender_wins() {
        assert_eq!(resolve_opposed(1, 5), OpposedResult::Defender);
    }

    #[test]
    fn equal_hits_tie() {
        assert_eq!(resolve_opposed(3, 3), OpposedResult::Tie);
        assert_eq!(resolve_opposed(0, 0), OpposedResult::Tie);
    }

    #[test]
    fn display() {
        assert_eq!(OpposedResult::Attacker.to_string(), "attacker");
        assert_eq!(OpposedResult::Defender.to_string(), "defender");
        assert_eq!(OpposedResult::Tie.to_string(), "tie");
    }
}

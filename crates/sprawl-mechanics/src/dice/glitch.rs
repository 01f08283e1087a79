//! Glitch and critical glitch detection.

use serde::{Deserialize, Serialize};

/// Glitch classification for a roll.
///
/// A glitch fires when half or more of the dice (rounded down) show 1
/// and at least one die was rolled. A critical glitch is a glitch with
/// zero hits. By construction `critical_glitch` implies `glitch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlitchStatus {
    /// Half or more of the dice came up 1.
    pub glitch: bool,
    /// Glitched with zero hits.
    pub critical_glitch: bool,
}

impl GlitchStatus {
    /// Classify a roll from its face values and hit count.
    ///
    /// The hit count must be the one counted under the threshold the roll
    /// was actually made with; detection itself is threshold-independent.
    pub fn detect(values: &[u8], hits: u32) -> Self {
        let ones = values.iter().filter(|&&v| v == 1).count();
        let glitch = !values.is_empty() && ones >= values.len() / 2;
        Self {
            glitch,
            critical_glitch: glitch && hits == 0,
        }
    }
}

impl std::fmt::Display for GlitchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.critical_glitch {
            write!(f, "critical glitch")
        } else if self.glitch {
            write!(f, "glitch")
        } else {
            write!(f, "no glitch")
        }
    }
}

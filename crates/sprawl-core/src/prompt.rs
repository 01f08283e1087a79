//! Data-driven storytelling prompts for players.

use serde::{Deserialize, Serialize};

/// The kind of prompt to put to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptKind {
    /// Ask how the character applies one of their cues.
    Cue,
    /// Ask for the character's current disposition.
    Disposition,
}

impl PromptKind {
    /// The prompt text to put to the player.
    pub fn text(self) -> &'static str {
        match self {
            Self::Cue => "Describe how your character applies their Cue in this scene.",
            Self::Disposition => "What is your character's current disposition?",
        }
    }

    /// Parse a prompt kind from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cue" => Some(Self::Cue),
            "disposition" => Some(Self::Disposition),
            _ => None,
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cue => write!(f, "cue"),
            Self::Disposition => write!(f, "disposition"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_nonempty() {
        assert!(!PromptKind::Cue.text().is_empty());
        assert!(!PromptKind::Disposition.text().is_empty());
    }

    #[test]
    fn parse_round_trip() {
        assert_eq!(PromptKind::parse("Cue"), Some(PromptKind::Cue));
        assert_eq!(PromptKind::parse("DISPOSITION"), Some(PromptKind::Disposition));
        assert_eq!(PromptKind::parse("mood"), None);
    }
}

//! Typed character records.
//!
//! A character is a plain value record: named attribute and skill scores,
//! a condition monitor, plot points, and the karma bookkeeping the
//! advancement rules update. The constructor sets every default field, so
//! callers never patch missing keys after the fact.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// A player character or named NPC with mechanical stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier for persistence.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Attribute scores (e.g., Agility: 3, Willpower: 4).
    pub attributes: HashMap<String, i32>,
    /// Skill scores (e.g., Firearms: 2, Stealth: 1).
    pub skills: HashMap<String, i32>,
    /// Remaining condition monitor capacity.
    pub monitor: u32,
    /// Maximum condition monitor capacity.
    pub max_monitor: u32,
    /// Narrative currency for special player actions.
    pub plot_points: u32,
    /// Cumulative karma spent, keyed by the attribute or skill advanced.
    pub karma_spent: HashMap<String, u32>,
    /// Cues the character can invoke in a scene.
    pub cues: Vec<String>,
    /// Cues already invoked this session.
    pub cues_used: Vec<String>,
}

impl Character {
    /// Default condition monitor capacity for a fresh character.
    pub const DEFAULT_MONITOR: u32 = 10;

    /// Create a character with a fresh id and default fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            attributes: HashMap::new(),
            skills: HashMap::new(),
            monitor: Self::DEFAULT_MONITOR,
            max_monitor: Self::DEFAULT_MONITOR,
            plot_points: 0,
            karma_spent: HashMap::new(),
            cues: Vec::new(),
            cues_used: Vec::new(),
        }
    }

    /// Set an attribute score.
    pub fn with_attribute(mut self, name: impl Into<String>, score: i32) -> Self {
        self.attributes.insert(name.into(), score);
        self
    }

    /// Set a skill score.
    pub fn with_skill(mut self, name: impl Into<String>, score: i32) -> Self {
        self.skills.insert(name.into(), score);
        self
    }

    /// Set the condition monitor capacity (current starts full).
    pub fn with_monitor(mut self, max: u32) -> Self {
        self.monitor = max;
        self.max_monitor = max;
        self
    }

    /// Add a cue.
    pub fn with_cue(mut self, cue: impl Into<String>) -> Self {
        self.cues.push(cue.into());
        self
    }

    /// Get an attribute score, returning an error if the character
    /// does not have it.
    pub fn attribute(&self, name: &str) -> CoreResult<i32> {
        self.attributes
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownAttribute(name.to_string()))
    }

    /// Get a skill score, returning 0 if untrained.
    pub fn skill(&self, name: &str) -> i32 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    /// Total karma ever spent across all advancement categories.
    pub fn total_karma_spent(&self) -> u32 {
        self.karma_spent.values().sum()
    }
}

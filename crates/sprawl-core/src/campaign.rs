//! Campaign, session, and NPC records.
//!
//! A campaign is the container the host saves between sessions: the
//! characters in play, recurring NPCs, and a log of what happened each
//! session. Session logs are timestamped when they are created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::Character;

/// A non-player character with lookup tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Display name.
    pub name: String,
    /// Tags used for random lookup (e.g., "fixer", "enemy").
    pub tags: Vec<String>,
    /// Freeform GM notes.
    pub notes: String,
}

impl Npc {
    /// Create an NPC with no tags or notes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            notes: String::new(),
        }
    }

    /// Add a lookup tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Returns true if the NPC carries the given tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A contract brief: the job details runners are hired for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractBrief {
    /// Name of the contract or job.
    pub name: String,
    /// Who is paying.
    pub employer: String,
    /// Agreed payout, in the campaign's currency.
    pub payout: u32,
    /// Freeform mission details.
    pub details: String,
}

impl ContractBrief {
    /// Create a brief with no employer, payout, or details yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employer: String::new(),
            payout: 0,
            details: String::new(),
        }
    }

    /// Set the employer.
    pub fn with_employer(mut self, employer: impl Into<String>) -> Self {
        self.employer = employer.into();
        self
    }

    /// Set the payout.
    pub fn with_payout(mut self, payout: u32) -> Self {
        self.payout = payout;
        self
    }

    /// Set the mission details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

/// A single item of loot handed out during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootItem {
    /// What was handed out.
    pub name: String,
    /// How many.
    pub quantity: u32,
}

/// A record of one played session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    /// The session's number in the campaign.
    pub number: u32,
    /// A brief summary of the session's events.
    pub summary: String,
    /// NPC names involved in the session.
    pub npcs: Vec<String>,
    /// Loot or rewards distributed.
    pub loot: Vec<LootItem>,
    /// When the log was recorded (UTC).
    pub logged_at: DateTime<Utc>,
}

impl SessionLog {
    /// Create a session log stamped with the current time.
    pub fn new(number: u32, summary: impl Into<String>) -> Self {
        Self {
            number,
            summary: summary.into(),
            npcs: Vec::new(),
            loot: Vec::new(),
            logged_at: Utc::now(),
        }
    }

    /// Record an NPC as having appeared.
    pub fn with_npc(mut self, name: impl Into<String>) -> Self {
        self.npcs.push(name.into());
        self
    }

    /// Record a loot item.
    pub fn with_loot(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.loot.push(LootItem {
            name: name.into(),
            quantity,
        });
        self
    }
}

/// A campaign: characters, NPCs, and the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Stable identifier for persistence.
    pub id: Uuid,
    /// Campaign name.
    pub name: String,
    /// Session logs in play order.
    pub sessions: Vec<SessionLog>,
    /// Characters in play.
    pub characters: Vec<Character>,
    /// Recurring NPCs.
    pub npcs: Vec<Npc>,
    /// Contract briefs on offer or in play.
    pub briefs: Vec<ContractBrief>,
}

impl Campaign {
    /// Create an empty campaign with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sessions: Vec::new(),
            characters: Vec::new(),
            npcs: Vec::new(),
            briefs: Vec::new(),
        }
    }

    /// Append a session log.
    pub fn log_session(&mut self, log: SessionLog) {
        self.sessions.push(log);
    }

    /// Find a character by name (case-insensitive).
    pub fn find_character(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find a contract brief by name (case-insensitive), or `None` if
    /// no job by that name is on the books.
    pub fn find_brief(&self, name: &str) -> Option<&ContractBrief> {
        self.briefs
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// The number of the next session to be played.
    pub fn next_session_number(&self) -> u32 {
        self.sessions.last().map_or(1, |s| s.number + 1)
    }
}

//! Core records for the Sprawlrunner rules helper.
//!
//! Provides the typed character, NPC, session, and campaign records the
//! mechanics engine reads and writes, a narrow `Store` seam for hosts that
//! persist those records, and data-driven player prompts.

pub mod campaign;
pub mod character;
pub mod error;
pub mod prompt;
pub mod store;

pub use campaign::{Campaign, ContractBrief, LootItem, Npc, SessionLog};
pub use character::Character;
pub use error::{CoreError, CoreResult};
pub use prompt::PromptKind;
pub use store::{JsonDirStore, MemoryStore, Store, load_record, save_record};

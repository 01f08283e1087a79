//! Anarchy-style rules resolution engine for Sprawlrunner.
//!
//! Two cooperating pieces, both pure: a dice engine (d6 pools, hit
//! counting, glitch detection, Edge rerolls, initiative) and a combat
//! resolver (opposed tests, condition monitors, ammo tracking, karma
//! advancement, plot points). Every rolling operation takes the caller's
//! RNG; nothing here does I/O or keeps hidden state.

pub mod advancement;
pub mod ammo;
pub mod dice;
pub mod error;
pub mod initiative;
pub mod monitor;
pub mod opposed;
pub mod plot;
pub mod tables;

pub use advancement::{Advancement, apply_advancement};
pub use ammo::{AmmoState, track_ammo};
pub use dice::{DicePool, GlitchStatus, RollResult, Threshold};
pub use error::{MechError, MechResult};
pub use initiative::{calculate_initiative, initiative_for};
pub use monitor::{ConditionMonitor, ConditionStatus};
pub use opposed::{OpposedResult, resolve_opposed};
pub use plot::{award_plot_point, spend_plot_point};
pub use tables::{random_npc, roll_on_table};

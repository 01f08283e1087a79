//! Karma-gated attribute and skill advancement.

use sprawl_core::Character;

/// The outcome of a karma advancement attempt.
#[derive(Debug, Clone)]
pub enum Advancement {
    /// Advancement applied; carries the updated character record.
    Applied(Character),
    /// Not enough karma; the caller's record is untouched.
    Refused {
        /// Karma the advancement would have cost.
        cost: u32,
        /// Karma the character actually had available.
        available: u32,
    },
}

impl Advancement {
    /// Whether the advancement went through.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Spend karma to raise an attribute or skill by `amount`.
///
/// If `karma_available` is less than `cost` the advancement is refused
/// outright and no state changes. Otherwise the named skill is raised if
/// the character has it; anything else is treated as an attribute and
/// created at 0 if absent. The cost accumulates under the same field in
/// the character's karma ledger.
pub fn apply_advancement(
    character: &Character,
    field: &str,
    amount: i32,
    cost: u32,
    karma_available: u32,
) -> Advancement {
    if karma_available < cost {
        return Advancement::Refused {
            cost,
            available: karma_available,
        };
    }

    let mut updated = character.clone();
    if updated.skills.contains_key(field) {
        *updated.skills.entry(field.to_string()).or_insert(0) += amount;
    } else {
        *updated.attributes.entry(field.to_string()).or_insert(0) += amount;
    }
    *updated.karma_spent.entry(field.to_string()).or_insert(0) += cost;
    Advancement::Applied(updated)
}

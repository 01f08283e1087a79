//! Random table and NPC lookup.

use rand::Rng;
use rand::rngs::StdRng;
use sprawl_core::Npc;

/// Pick a uniformly random entry from a table, or `None` if it is empty.
pub fn roll_on_table<'a, T>(table: &'a [T], rng: &mut StdRng) -> Option<&'a T> {
    if table.is_empty() {
        return None;
    }
    Some(&table[rng.random_range(0..table.len())])
}

/// Pick a random NPC, optionally restricted to those carrying a tag.
///
/// With a tag, only matching NPCs are candidates; no match yields `None`
/// rather than falling back to the whole list.
pub fn random_npc<'a>(npcs: &'a [Npc], tag: Option<&str>, rng: &mut StdRng) -> Option<&'a Npc> {
    match tag {
        Some(tag) => {
            let matching: Vec<&Npc> = npcs.iter().filter(|n| n.has_tag(tag)).collect();
            if matching.is_empty() {
                None
            } else {
                Some(matching[rng.random_range(0..matching.len())])
            }
        }
        None => roll_on_table(npcs, rng),
    }
}

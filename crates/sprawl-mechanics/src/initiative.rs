//! Initiative calculation for combat order.

use rand::Rng;
use rand::rngs::StdRng;
use sprawl_core::Character;

use crate::dice::DIE_SIDES;
use crate::error::{MechError, MechResult};

/// Calculate initiative: `attribute + skill + bonus + 1d6`.
///
/// The randomness contributes exactly one die; everything else is the
/// caller's numbers, including any situational or gear bonus.
pub fn calculate_initiative(attribute: i32, skill: i32, bonus: i32, rng: &mut StdRng) -> i32 {
    let roll = i32::from(rng.random_range(1..=DIE_SIDES));
    attribute + skill + bonus + roll
}

/// Calculate initiative from a character record's named fields.
///
/// The attribute must exist on the record; an untrained skill counts 0.
pub fn initiative_for(
    character: &Character,
    attribute: &str,
    skill: &str,
    bonus: i32,
    rng: &mut StdRng,
) -> MechResult<i32> {
    let attr = character
        .attribute(attribute)
        .map_err(|_| MechError::UnknownAttribute(attribute.to_string()))?;
    let skill = character.skill(skill);
    Ok(calculate_initiative(attr, skill, bonus, rng))
}

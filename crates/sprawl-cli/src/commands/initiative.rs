use sprawl_mechanics::calculate_initiative;

pub fn run(attribute: i32, skill: i32, bonus: i32, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::rng_from_seed(seed);
    let total = calculate_initiative(attribute, skill, bonus, &mut rng);
    println!("  Initiative: {total}");
    Ok(())
}

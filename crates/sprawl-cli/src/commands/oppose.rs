use sprawl_mechanics::{OpposedResult, resolve_opposed};

pub fn run(attacker: u32, defender: u32) -> Result<(), String> {
    let result = resolve_opposed(attacker, defender);
    match result {
        OpposedResult::Tie => println!("  {attacker} vs {defender}: tie"),
        _ => println!("  {attacker} vs {defender}: {result} wins"),
    }
    Ok(())
}

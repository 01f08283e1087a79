use colored::Colorize;

use sprawl_mechanics::{DicePool, Threshold};

pub fn run(pool: u32, edge: bool, reroll: bool, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::rng_from_seed(seed);
    let threshold = Threshold::from_edge(edge);

    let mut result = DicePool::new(pool).roll(threshold, &mut rng);
    println!("  Rolled {pool}d6 ({threshold}): {result}");

    if reroll {
        result = result.reroll_failures(&mut rng);
        println!("  Rerolled failures:   {result}");
    }

    let status = result.glitch_status();
    if status.critical_glitch {
        println!("  {}", "Critical glitch!".red().bold());
    } else if status.glitch {
        println!("  {}", "Glitch!".yellow());
    }

    Ok(())
}

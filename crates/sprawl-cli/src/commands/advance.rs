use std::path::Path;

use colored::Colorize;

use sprawl_core::{JsonDirStore, save_record};
use sprawl_mechanics::{Advancement, apply_advancement};

pub fn run(
    name: &str,
    field: &str,
    amount: i32,
    cost: u32,
    karma: u32,
    dir: &Path,
) -> Result<(), String> {
    let character = super::load_character(name, dir)?;

    match apply_advancement(&character, field, amount, cost, karma) {
        Advancement::Applied(updated) => {
            let mut store = JsonDirStore::new(dir).map_err(|e| e.to_string())?;
            save_record(&mut store, &super::slug(name), &updated).map_err(|e| e.to_string())?;
            println!("  Advanced {field} by {amount} for {cost} karma");
        }
        Advancement::Refused { cost, available } => {
            // Not an error: the record is simply left as it was.
            println!(
                "  {}",
                format!("Not enough karma: need {cost}, have {available}").yellow()
            );
        }
    }
    Ok(())
}

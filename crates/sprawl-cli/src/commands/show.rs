use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(name: &str, dir: &Path) -> Result<(), String> {
    let character = super::load_character(name, dir)?;

    println!("  {}", character.name.bold());
    println!("  monitor:     {}/{}", character.monitor, character.max_monitor);
    println!("  plot points: {}", character.plot_points);
    if character.total_karma_spent() > 0 {
        println!("  karma spent: {}", character.total_karma_spent());
    }
    if !character.cues.is_empty() {
        println!("  cues:        {}", character.cues.join(", "));
    }
    println!();

    if character.attributes.is_empty() && character.skills.is_empty() {
        println!("  No attributes or skills yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Kind", "Score", "Karma spent"]);

    let mut attributes: Vec<&String> = character.attributes.keys().collect();
    attributes.sort();
    for name in attributes {
        let spent = character.karma_spent.get(name).copied().unwrap_or(0);
        table.add_row(vec![
            name.clone(),
            "attribute".to_string(),
            character.attributes[name].to_string(),
            spent.to_string(),
        ]);
    }

    let mut skills: Vec<&String> = character.skills.keys().collect();
    skills.sort();
    for name in skills {
        let spent = character.karma_spent.get(name).copied().unwrap_or(0);
        table.add_row(vec![
            name.clone(),
            "skill".to_string(),
            character.skills[name].to_string(),
            spent.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

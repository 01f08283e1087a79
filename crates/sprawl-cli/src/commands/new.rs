use std::path::Path;

use sprawl_core::{Character, JsonDirStore, load_record, save_record};

pub fn run(name: &str, dir: &Path) -> Result<(), String> {
    let mut store = JsonDirStore::new(dir).map_err(|e| e.to_string())?;
    let key = super::slug(name);

    let existing: Option<Character> = load_record(&store, &key).map_err(|e| e.to_string())?;
    if existing.is_some() {
        return Err(format!("character \"{name}\" already exists"));
    }

    let character = Character::new(name);
    save_record(&mut store, &key, &character).map_err(|e| e.to_string())?;
    println!("  Created character '{name}'");
    Ok(())
}

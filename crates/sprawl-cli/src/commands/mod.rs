pub mod advance;
pub mod ammo;
pub mod damage;
pub mod heal;
pub mod initiative;
pub mod new;
pub mod oppose;
pub mod prompt;
pub mod roll;
pub mod show;

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sprawl_core::{Character, JsonDirStore, load_record};

/// RNG for a command: seeded when the user asked for reproducibility,
/// OS-seeded otherwise.
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Character records are stored under a slug of their name.
fn slug(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(' ', "_")
}

/// Load a character by name from the campaign directory.
fn load_character(name: &str, dir: &Path) -> Result<Character, String> {
    let store = JsonDirStore::new(dir).map_err(|e| e.to_string())?;
    load_record::<Character>(&store, &slug(name))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("character not found: \"{name}\""))
}

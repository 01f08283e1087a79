use colored::Colorize;

use sprawl_mechanics::track_ammo;

pub fn run(current: u32, shots: u32, magazine: u32) -> Result<(), String> {
    let state = track_ammo(current, shots, magazine);
    println!("  Ammo left: {}", state.ammo_left);
    if state.needs_reload {
        println!("  {}", "Reload needed!".yellow());
    }
    Ok(())
}

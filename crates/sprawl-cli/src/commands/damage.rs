use colored::Colorize;

use sprawl_mechanics::{ConditionMonitor, ConditionStatus};

pub fn run(monitor: u32, damage: u32, max: u32) -> Result<(), String> {
    let mut m = ConditionMonitor::at(monitor, max);
    let overflow = m.apply_damage(damage);
    let status = m.status(overflow);

    println!("  Monitor: {monitor} -> {} (overflow {overflow})", m.current);
    let status_line = format!("Status: {status}");
    match status {
        ConditionStatus::Ok => println!("  {status_line}"),
        ConditionStatus::Overflow => println!("  {}", status_line.yellow()),
        ConditionStatus::Unconscious => println!("  {}", status_line.red().bold()),
    }
    Ok(())
}

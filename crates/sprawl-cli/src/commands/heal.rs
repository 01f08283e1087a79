use sprawl_mechanics::ConditionMonitor;

pub fn run(monitor: u32, healing: u32, max: u32) -> Result<(), String> {
    let mut m = ConditionMonitor::at(monitor, max);
    m.heal(healing);
    println!("  Monitor: {monitor} -> {} (max {max})", m.current);
    Ok(())
}

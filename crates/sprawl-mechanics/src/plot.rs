//! Plot points: narrative currency spent and awarded during play.

/// Spend one plot point. Spending at zero is a no-op, not an error.
pub fn spend_plot_point(current: u32) -> u32 {
    current.saturating_sub(1)
}

/// Award one plot point. No upper bound short of the counter's range.
pub fn award_plot_point(current: u32) -> u32 {
    current.saturating_add(1)
}

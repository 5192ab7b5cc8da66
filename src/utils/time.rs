//! Time utilities: decomposing second counts and formatting durations.

/// Decompose a second count into whole (hours, minutes).
/// Remainder seconds are discarded.
pub fn get_time(seconds: i64) -> (i64, i64) {
    (seconds / 3600, seconds % 3600 / 60)
}

/// Render a second count as "{:02}h {:02}min".
pub fn format_duration(seconds: i64) -> String {
    let (hours, minutes) = get_time(seconds);
    format!("{:02}h {:02}min", hours, minutes)
}

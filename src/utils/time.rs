//! Time utilities: duration and epoch-timestamp rendering for tables and
//! exports.

use chrono::DateTime;

/// Render seconds as `HHhMMm` (or `HHh MMm`), truncating via floor division.
/// Durations are never rounded up; negative inputs clamp to zero.
pub fn format_duration(seconds: i64, with_space: bool) -> String {
    let total = seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let separator = if with_space { " " } else { "" };
    format!("{:02}h{}{:02}m", hours, separator, minutes)
}

/// Full and minute-trimmed renderings of an epoch timestamp.
/// `("Never", "")` when the timestamp is absent or out of range.
pub fn format_epoch(epoch_seconds: Option<f64>) -> (String, String) {
    let Some(epoch) = epoch_seconds else {
        return ("Never".to_string(), String::new());
    };

    match DateTime::from_timestamp(epoch as i64, 0) {
        Some(dt) => {
            let naive = dt.naive_utc();
            (
                naive.format("%Y-%m-%d %H:%M:%S").to_string(),
                naive.format("%Y-%m-%d %H:%M").to_string(),
            )
        }
        None => ("Never".to_string(), String::new()),
    }
}

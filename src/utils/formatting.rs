//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render an hour value with one decimal, e.g. `2.5` or `0.0`.
/// Matches the precision used across tables, metrics and exports.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

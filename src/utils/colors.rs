//! ANSI color helper utilities for terminal output.

use crate::models::department::Department;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Fixed color per department, shared by the bar chart and the tables.
pub fn color_for_department(dept: Department) -> &'static str {
    match dept {
        Department::Scheduling => BLUE,
        Department::Occ => CYAN,
        Department::Training => MAGENTA,
        Department::Operations => YELLOW,
    }
}

/// Grey out zero-hour cells so the single non-zero column stands out.
pub fn colorize_hours(value: f64, formatted: &str) -> String {
    if value == 0.0 {
        format!("{GREY}{formatted}{RESET}")
    } else {
        formatted.to_string()
    }
}

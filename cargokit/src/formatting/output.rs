//! General output formatting utilities.

use std::path::Path;

use cargokit_core::naming::path_to_member;
use owo_colors::OwoColorize;

/// Prints a key-value pair with consistent formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {} {}", key.bright_black().bold(), value.bold().white());
}

/// Formats duration in a human-readable way.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{:.0}ms", seconds * 1000.0)
    } else if seconds < 60.0 {
        format!("{:.2}s", seconds)
    } else {
        let mins = (seconds / 60.0) as u64;
        let secs = seconds % 60.0;
        format!("{}m {:.1}s", mins, secs)
    }
}

/// Formats a workspace-relative path with forward slashes.
pub fn format_path(path: &Path) -> String {
    let formatted = path_to_member(path);
    if formatted.is_empty() {
        ".".to_string()
    } else {
        formatted
    }
}

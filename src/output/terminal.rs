//! Terminal output utilities.
//!
//! Provides formatting helpers for the command-line results.

use colored::Colorize;

/// Render a check result as `yes`/`no`, coloured when `color` is set.
pub fn format_bool(value: bool, color: bool) -> String {
    let text = if value { "yes" } else { "no" };
    match (color, value) {
        (false, _) => text.to_string(),
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}

/// One `label: value` line with the label padded to `width`.
pub fn format_line(label: &str, value: &str, width: usize) -> String {
    format!("{label:<width$} {value}")
}

/// Render an optional text result, `-` when absent.
pub fn format_option(value: Option<&str>, color: bool) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ if color => "-".dimmed().to_string(),
        _ => "-".to_string(),
    }
}

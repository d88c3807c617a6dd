//! Formatting helpers for the `inspect` summary.

use owo_colors::OwoColorize;

use super::colors_enabled;

const LABEL_WIDTH: usize = 14;

/// Section title.
pub fn heading(title: &str) -> String {
    if colors_enabled() {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Aligned `label  value` line, indented under a heading.
///
/// Labels are padded to a fixed width so values line up within a section.
///
/// # Examples
///
/// ```
/// use kiln_cli::ui;
///
/// ui::init_colors(true);
/// assert_eq!(ui::row("mode", "production"), format!("  {:<14} production", "mode"));
/// ```
pub fn row(label: &str, value: impl std::fmt::Display) -> String {
    let label = format!("{label:<LABEL_WIDTH$}");
    if colors_enabled() {
        format!("  {} {value}", label.cyan())
    } else {
        format!("  {label} {value}")
    }
}

/// Bulleted line, indented under a heading.
pub fn list_item(text: impl std::fmt::Display) -> String {
    if colors_enabled() {
        format!("  {} {text}", "•".dimmed())
    } else {
        format!("  • {text}")
    }
}

//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Style};

use super::colors_enabled;

fn emit(symbol: &str, symbol_style: Style, message: &str, message_style: Option<Style>) {
    if !colors_enabled() {
        eprintln!("{symbol} {message}");
        return;
    }
    match message_style {
        Some(style) => eprintln!("{} {}", symbol.style(symbol_style), message.style(style)),
        None => eprintln!("{} {}", symbol.style(symbol_style), message),
    }
}

/// Print a success message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::success;
///
/// success("Overrides are valid");
/// ```
pub fn success(message: &str) {
    emit("✓", Style::new().green().bold(), message, None);
}

/// Print an info message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::info;
///
/// info("Checking overrides for production");
/// ```
pub fn info(message: &str) {
    emit("ℹ", Style::new().blue().bold(), message, None);
}

/// Print a warning message to stderr.
///
/// The message text is colored as well as the symbol.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::warning;
///
/// warning("No kiln.toml found, checking built-in defaults");
/// ```
pub fn warning(message: &str) {
    emit(
        "⚠",
        Style::new().yellow().bold(),
        message,
        Some(Style::new().yellow()),
    );
}

/// Print an error message to stderr.
///
/// Only the status line; the error itself is reported by `main`.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use kiln_cli::ui::error;
///
/// error("Validation failed");
/// ```
pub fn error(message: &str) {
    emit("✗", Style::new().red().bold(), message, Some(Style::new().red()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }
}

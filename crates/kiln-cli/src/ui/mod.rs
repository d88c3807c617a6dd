//! Terminal output helpers.
//!
//! Everything here writes to stderr; stdout is reserved for machine-readable
//! output such as the manifest printed by `kiln resolve`.
//!
//! ```no_run
//! use kiln_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Overrides are valid");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{heading, list_item, row};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether status output is colored.
///
/// `--no-color` always wins; otherwise the terminal and the `NO_COLOR` /
/// `FORCE_COLOR` conventions decide.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    COLORS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

//! Kiln CLI - resolve, validate and inspect build profiles.
//!
//! The binary is a thin shell around [`kiln_config`]:
//!
//! - [`settings`] - layered overrides (defaults, project file, `KILN_*` env)
//! - [`commands`] - `resolve`, `check` and `inspect`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result};

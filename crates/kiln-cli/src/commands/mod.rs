//! Command implementations for the Kiln CLI.
//!
//! - [`resolve`] - Print the bundler manifest
//! - [`check`] - Validate overrides
//! - [`inspect`] - Human-readable profile summary
//!
//! Each command provides an `execute` function that takes its parsed
//! arguments and returns a Result.

pub mod check;
pub mod inspect;
pub mod resolve;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use inspect::execute as inspect_execute;
pub use resolve::execute as resolve_execute;

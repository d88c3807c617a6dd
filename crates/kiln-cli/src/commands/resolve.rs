//! Resolve command implementation.
//!
//! Prints the bundler manifest for the selected profile on stdout.

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::settings::ProjectSettings;

/// Execute the resolve command.
///
/// # Errors
///
/// Returns errors for an unknown profile, an unreadable or malformed config
/// file, or invalid `KILN_*` environment values.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let settings = ProjectSettings::load(&args.profile)?;
    let profile = utils::build_profile(&settings);
    let json = profile.manifest().to_json(!args.compact)?;
    utils::write_stdout(&json)
}

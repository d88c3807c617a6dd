//! Shared utilities for command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use kiln_config::{BuildProfile, Resolver};
use tracing::info;

use crate::error::Result;
use crate::settings::ProjectSettings;

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve the build profile described by `settings`.
pub fn build_profile(settings: &ProjectSettings) -> BuildProfile {
    info!(
        profile = %settings.profile,
        config = %settings.source_display(),
        "resolving build profile"
    );
    Resolver::new(settings.overrides.clone()).resolve(settings.profile)
}

/// Write `text` and a trailing newline to stdout.
///
/// A closed pipe (`kiln resolve | head`) is not an error.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match writeln!(stdout, "{text}").and_then(|_| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}

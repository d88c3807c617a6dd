//! Error handling for the Kiln CLI.
//!
//! Library failures arrive as [`kiln_config::ConfigError`] and are wrapped in
//! [`CliError`]; `main` converts the final error into a miette report with a
//! hint where one helps.

use std::path::PathBuf;

use kiln_config::ConfigError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Profile selection, config loading or validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Explicit `--config` path that does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CLI error to a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match hint(&err) {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Config(ConfigError::UnknownProfile(_)) => {
            Some("Set NODE_ENV or --profile to 'production' or 'development'")
        }
        CliError::Config(ConfigError::EntryNotFound { .. }) => {
            Some("Check the 'entry' field in kiln.toml")
        }
        CliError::Config(ConfigError::TemplateNotFound { .. }) => {
            Some("Create public/index.html or set 'template' in kiln.toml")
        }
        CliError::ConfigFileNotFound(_) => Some("Omit --config to use kiln.toml discovery"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let cli_err: CliError = ConfigError::UnknownProfile("staging".into()).into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert!(cli_err.to_string().contains("'staging'"));
    }

    #[test]
    fn unknown_profile_report_has_help() {
        let report = cli_error_to_miette(ConfigError::UnknownProfile("qa".into()).into());
        let help = report.help().map(|help| help.to_string()).unwrap();
        assert!(help.contains("NODE_ENV"));
    }

    #[test]
    fn io_error_report_has_no_help() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let report = cli_error_to_miette(err.into());
        assert!(report.help().is_none());
        assert!(report.to_string().contains("denied"));
    }
}

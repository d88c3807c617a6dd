//! Pluggable override validation strategies
//!
//! Schema checks run anywhere; filesystem checks are for the CLI, where the
//! project tree is on disk. Resolution itself never calls into either.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::overrides::ResolveOverrides;

/// Largest inline-asset threshold accepted, in bytes.
pub const MAX_INLINE_LIMIT: u64 = 1024 * 1024;

/// Trait for pluggable override validation strategies
pub trait ConfigValidator {
    fn validate(&self, overrides: &ResolveOverrides) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigValidator, ResolveOverrides, SchemaValidator};
///
/// SchemaValidator.validate(&ResolveOverrides::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, overrides: &ResolveOverrides) -> Result<()> {
        if overrides.entry.as_os_str().is_empty() {
            return Err(ConfigError::schema(
                "entry cannot be empty",
                "Point 'entry' at the application's main module",
            ));
        }

        let server = &overrides.dev_server;
        if server.port == 0 {
            return Err(ConfigError::schema(
                "dev_server.port must be non-zero",
                "Pick a free port such as 3003",
            ));
        }
        if server.host.trim().is_empty() {
            return Err(ConfigError::schema(
                "dev_server.host cannot be empty",
                "Use 'localhost' to serve on the loopback interface",
            ));
        }

        if overrides.inline_limit > MAX_INLINE_LIMIT {
            return Err(ConfigError::schema(
                format!(
                    "inline_limit {} exceeds {MAX_INLINE_LIMIT} bytes",
                    overrides.inline_limit
                ),
                "Large images should be emitted as files; lower 'inline_limit'",
            ));
        }

        if let Some(name) = overrides.theme.keys().find(|name| !name.starts_with('@')) {
            return Err(ConfigError::schema(
                format!("theme variable '{name}' must start with '@'"),
                format!("Rename it to '@{name}'"),
            ));
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then requires the entry module, the source
/// directory and the HTML template to exist under the project root.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{ConfigValidator, FsValidator, ResolveOverrides};
///
/// FsValidator::new(".").validate(&ResolveOverrides::default()).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, overrides: &ResolveOverrides) -> Result<()> {
        SchemaValidator.validate(overrides)?;

        let entry = self.root.join(&overrides.entry);
        if !entry.is_file() {
            return Err(ConfigError::EntryNotFound { path: entry });
        }

        let src_dir = self.root.join(&overrides.src_dir);
        if !src_dir.is_dir() {
            return Err(ConfigError::SourceDirNotFound { path: src_dir });
        }

        let template = self.root.join(overrides.template_path());
        if !template.is_file() {
            return Err(ConfigError::TemplateNotFound { path: template });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(overrides: &ResolveOverrides) -> Result<()> {
    SchemaValidator.validate(overrides)
}

/// Convenience function for filesystem validation against `root`
pub fn validate_fs(overrides: &ResolveOverrides, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_pass_schema() {
        assert!(validate_schema(&ResolveOverrides::default()).is_ok());
    }

    #[test]
    fn zero_port_is_rejected() {
        let overrides = ResolveOverrides::default().with_port(0);
        let err = validate_schema(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaValidation { .. }));
        assert!(err.to_string().contains("dev_server.port"));
    }

    #[test]
    fn empty_entry_is_rejected() {
        let overrides = ResolveOverrides::default().with_entry("");
        assert!(validate_schema(&overrides).is_err());
    }

    #[test]
    fn inline_limit_is_capped() {
        let mut overrides = ResolveOverrides::default();
        overrides.inline_limit = MAX_INLINE_LIMIT;
        assert!(validate_schema(&overrides).is_ok());

        overrides.inline_limit = MAX_INLINE_LIMIT + 1;
        assert!(validate_schema(&overrides).is_err());
    }

    #[test]
    fn theme_keys_need_less_sigil() {
        let overrides = ResolveOverrides::default().with_theme_var("primary-color", "#000");
        let err = validate_schema(&overrides).unwrap_err();
        assert!(err.to_string().contains("'primary-color'"));
    }

    #[test]
    fn fs_validator_reports_missing_entry() {
        let dir = TempDir::new().unwrap();
        let err = validate_fs(&ResolveOverrides::default(), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound { .. }));
    }

    #[test]
    fn fs_validator_reports_missing_template() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.js"), "").unwrap();

        let err = validate_fs(&ResolveOverrides::default(), dir.path()).unwrap_err();
        match err {
            ConfigError::TemplateNotFound { path } => {
                assert!(path.ends_with("public/index.html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fs_validator_accepts_complete_project() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("src/main.js"), "").unwrap();
        fs::write(dir.path().join("public/index.html"), "<div id=root></div>").unwrap();

        assert!(validate_fs(&ResolveOverrides::default(), dir.path()).is_ok());
    }
}

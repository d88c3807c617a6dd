//! File-based config discovery for CLI use
//!
//! Handles finding and loading Kiln configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};
use crate::overrides::ResolveOverrides;
use crate::profile::Profile;

pub const CONFIG_FILE: &str = "kiln.toml";
pub const PACKAGE_JSON_FIELD: &str = "kiln";

/// File-based configuration discovery
///
/// Searches for Kiln configuration files in conventional locations and loads them.
/// Library users can build a [`KilnConfig`] with `KilnConfig::from_value()` instead.
///
/// # Example
///
/// ```no_run
/// use kiln_config::{ConfigDiscovery, Profile};
///
/// let discovery = ConfigDiscovery::new(".");
/// let overrides = discovery.load_overrides(Profile::Production).unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<KilnConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_file(&path)
    }

    /// Load the discovered file, or defaults when the project has none.
    pub fn load_or_default(&self) -> Result<KilnConfig> {
        match self.find() {
            Some(path) => load_file(&path),
            None => {
                debug!(root = %self.root.display(), "no config file found, using defaults");
                Ok(KilnConfig::default())
            }
        }
    }

    /// Load config and materialize the overrides for `profile`
    pub fn load_overrides(&self, profile: Profile) -> Result<ResolveOverrides> {
        self.load_or_default()?.materialize(profile)
    }
}

/// Load config from a specific file path
///
/// `package.json` files are read through their `kiln` field; anything else
/// is parsed as TOML.
pub fn load_file(path: &Path) -> Result<KilnConfig> {
    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_from_package_json(&content);
    }

    let toml_val: toml::Value = toml::from_str(&content)
        .map_err(|e| ConfigError::invalid_value("toml", format!("Invalid TOML syntax: {e}")))?;

    let value = serde_json::to_value(toml_val).map_err(|e| {
        ConfigError::invalid_value("toml", format!("TOML to JSON conversion failed: {e}"))
    })?;

    KilnConfig::from_value(value)
}

fn load_from_package_json(content: &str) -> Result<KilnConfig> {
    let parsed: Value = serde_json::from_str(content)
        .map_err(|e| ConfigError::invalid_value("package.json", format!("Invalid JSON: {e}")))?;

    let kiln_value = parsed.get(PACKAGE_JSON_FIELD).ok_or_else(|| {
        ConfigError::invalid_value(
            PACKAGE_JSON_FIELD,
            "Add a 'kiln' field to your package.json",
        )
    })?;

    if kiln_value.is_null() {
        return Err(ConfigError::invalid_value(
            PACKAGE_JSON_FIELD,
            "The 'kiln' field cannot be null",
        ));
    }

    KilnConfig::from_value(kiln_value.clone())
}

/// Discover and load overrides for `profile` from the current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use kiln_config::{discover, Profile};
///
/// let overrides = discover(Profile::Development).unwrap();
/// ```
pub fn discover(profile: Profile) -> Result<ResolveOverrides> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_overrides(profile)
}

//! Project configuration file structure and per-profile merging.
//!
//! A project file carries base `overrides` plus optional
//! `profiles.<name>.overrides` tables. Materializing a profile deep-merges
//! the profile table over the base: objects merge key by key, arrays and
//! scalars replace. For file discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::overrides::ResolveOverrides;
use crate::profile::Profile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KilnConfig {
    #[serde(default)]
    pub overrides: ResolveOverrides,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub overrides: Value,
}

impl KilnConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::KilnConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "overrides": { "entry": "src/index.jsx" }
    /// });
    ///
    /// let config = KilnConfig::from_value(value).unwrap();
    /// assert_eq!(config.overrides.entry, PathBuf::from("src/index.jsx"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Overrides with the profile's table merged over the base.
    ///
    /// Profile tables are keyed by profile name; a missing table leaves the
    /// base untouched. Tables named after anything other than a recognized
    /// profile are never selected.
    pub fn materialize(&self, profile: Profile) -> Result<ResolveOverrides> {
        let Some(profile_cfg) = self.profiles.get(profile.as_str()) else {
            return Ok(self.overrides.clone());
        };
        if profile_cfg.overrides.is_null() {
            return Ok(self.overrides.clone());
        }

        let mut base = serde_json::to_value(&self.overrides).map_err(|e| {
            ConfigError::invalid_value(profile_field(profile), e.to_string())
        })?;
        merge_values(&mut base, &profile_cfg.overrides);
        serde_json::from_value(base)
            .map_err(|e| ConfigError::invalid_value(profile_field(profile), e.to_string()))
    }
}

fn profile_field(profile: Profile) -> String {
    format!("profiles.{profile}.overrides")
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "overrides": {
                "entry": "src/index.jsx",
                "inline_limit": 2048
            }
        });

        let config = KilnConfig::from_value(value).unwrap();
        assert_eq!(config.overrides.entry, PathBuf::from("src/index.jsx"));
        assert_eq!(config.overrides.inline_limit, 2048);
    }

    #[test]
    fn to_value_serializes_config() {
        let mut config = KilnConfig::default();
        config.overrides.dev_server.port = 9000;

        let value = config.to_value().unwrap();
        assert_eq!(value["overrides"]["dev_server"]["port"], json!(9000));
    }

    #[test]
    fn profile_merging_works() {
        let value = json!({
            "overrides": {
                "output_dir": "dist",
                "dev_server": { "port": 3003, "host": "localhost" }
            },
            "profiles": {
                "development": {
                    "overrides": { "dev_server": { "port": 4000 } }
                },
                "production": {
                    "overrides": { "output_dir": "build" }
                }
            }
        });
        let config = KilnConfig::from_value(value).unwrap();

        let dev = config.materialize(Profile::Development).unwrap();
        assert_eq!(dev.dev_server.port, 4000);
        assert_eq!(dev.dev_server.host, "localhost");
        assert_eq!(dev.output_dir, PathBuf::from("dist"));

        let prod = config.materialize(Profile::Production).unwrap();
        assert_eq!(prod.output_dir, PathBuf::from("build"));
        assert_eq!(prod.dev_server.port, 3003);
    }

    #[test]
    fn invalid_profile_table_reports_field() {
        let value = json!({
            "profiles": {
                "production": { "overrides": { "inline_limit": "big" } }
            }
        });
        let config = KilnConfig::from_value(value).unwrap();
        let err = config.materialize(Profile::Production).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "profiles.production.overrides"
        ));
    }

    #[test]
    fn merge_replaces_arrays_and_scalars() {
        let mut target = json!({ "a": [1, 2], "b": { "c": 1, "d": 2 }, "e": "x" });
        merge_values(&mut target, &json!({ "a": [3], "b": { "d": 5 }, "e": 7 }));
        assert_eq!(target, json!({ "a": [3], "b": { "c": 1, "d": 5 }, "e": 7 }));
    }
}

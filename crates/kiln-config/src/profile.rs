//! Build profile selection.
//!
//! The profile is the single input that drives every conditional decision in
//! the resolver. It is read from `NODE_ENV` (the variable the surrounding
//! JavaScript tooling already sets through `cross-env`) or passed explicitly.
//!
//! Selection is strict: `production` and `development` are the only
//! recognized values. An unset or empty selector means `development`; any
//! other value fails with [`ConfigError::UnknownProfile`] so that a typo never
//! silently produces a development bundle.

use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable consulted by [`Profile::from_env`].
pub const PROFILE_ENV_VAR: &str = "NODE_ENV";

/// Build mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Unminified output, stable filenames, dev server with hot reload.
    #[default]
    Development,
    /// Fingerprinted, minified output with extracted stylesheets.
    Production,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Development, Profile::Production];

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Profile::Production)
    }

    /// Source map flavour handed to the bundler.
    pub fn devtool(self) -> &'static str {
        match self {
            Profile::Development => "cheap-module-source-map",
            Profile::Production => "source-map",
        }
    }

    /// Resolve an optional selector value.
    ///
    /// `None` and the empty string select development.
    ///
    /// ```
    /// use kiln_config::Profile;
    ///
    /// assert_eq!(Profile::from_selector(None).unwrap(), Profile::Development);
    /// assert_eq!(
    ///     Profile::from_selector(Some("production")).unwrap(),
    ///     Profile::Production
    /// );
    /// assert!(Profile::from_selector(Some("staging")).is_err());
    /// ```
    pub fn from_selector(selector: Option<&str>) -> Result<Self> {
        match selector {
            None | Some("") => Ok(Profile::Development),
            Some(value) => value.parse(),
        }
    }

    /// Read the profile from `NODE_ENV`.
    pub fn from_env() -> Result<Self> {
        match env::var(PROFILE_ENV_VAR) {
            Ok(value) => Self::from_selector(Some(&value)),
            Err(VarError::NotPresent) => Ok(Profile::Development),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::UnknownProfile(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(Profile::Development),
            "production" => Ok(Profile::Production),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn parses_recognized_values() {
        assert_eq!("production".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!(
            "development".parse::<Profile>().unwrap(),
            Profile::Development
        );
    }

    #[test]
    fn rejects_unrecognized_values() {
        for value in ["staging", "prod", "Production", " production", "test"] {
            let err = value.parse::<Profile>().unwrap_err();
            assert!(
                matches!(&err, ConfigError::UnknownProfile(v) if v == value),
                "{value} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>().unwrap(), profile);
        }
    }

    #[test]
    fn empty_selector_is_development() {
        assert_eq!(
            Profile::from_selector(Some("")).unwrap(),
            Profile::Development
        );
    }

    #[test]
    #[serial]
    fn from_env_reads_node_env() {
        unsafe {
            env::set_var(PROFILE_ENV_VAR, "production");
        }
        assert_eq!(Profile::from_env().unwrap(), Profile::Production);

        unsafe {
            env::set_var(PROFILE_ENV_VAR, "staging");
        }
        assert!(matches!(
            Profile::from_env(),
            Err(ConfigError::UnknownProfile(_))
        ));

        unsafe {
            env::remove_var(PROFILE_ENV_VAR);
        }
        assert_eq!(Profile::from_env().unwrap(), Profile::Development);
    }
}

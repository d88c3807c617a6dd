//! The JSON record handed to the bundler.
//!
//! [`BundlerManifest`] borrows from a [`BuildProfile`] and flattens the
//! profile-specific fields back into the shape the bundler expects
//! (`output.dir` and `devServer` are simply absent when they do not apply).

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::dev::DevServer;
use crate::error::{ConfigError, Result};
use crate::optimization::OptimizationPolicy;
use crate::plugin::Plugin;
use crate::profile::Profile;
use crate::resolver::{BuildProfile, RESOLVE_EXTENSIONS, Rule};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerManifest<'a> {
    pub mode: Profile,
    pub devtool: &'static str,
    pub entry: &'a Path,
    pub output: ManifestOutput<'a>,
    pub rules: Vec<&'a Rule>,
    pub plugins: &'a [Plugin],
    pub optimization: ManifestOptimization<'a>,
    pub resolve: ManifestResolve,
    /// Bundle size hints are turned off.
    pub performance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<&'a DevServer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<&'a Path>,
    pub js_name: &'a str,
    pub chunk_name: &'a str,
    pub asset_name: &'a str,
    pub clean: bool,
}

#[derive(Debug, Serialize)]
pub struct ManifestOptimization<'a> {
    #[serde(flatten)]
    pub policy: &'a OptimizationPolicy,
    pub minimize: bool,
}

#[derive(Debug, Serialize)]
pub struct ManifestResolve {
    pub extensions: [&'static str; 3],
}

impl<'a> From<&'a BuildProfile> for BundlerManifest<'a> {
    fn from(profile: &'a BuildProfile) -> Self {
        let dir = profile.output_dir();
        Self {
            mode: profile.profile,
            devtool: profile.devtool(),
            entry: &profile.entry,
            output: ManifestOutput {
                dir,
                js_name: &profile.output.js_name,
                chunk_name: &profile.output.chunk_name,
                asset_name: &profile.output.asset_name,
                clean: dir.is_some(),
            },
            rules: profile.rules.values().collect(),
            plugins: &profile.plugins,
            optimization: ManifestOptimization {
                policy: &profile.optimization,
                minimize: profile.optimization.minimize(),
            },
            resolve: ManifestResolve {
                extensions: RESOLVE_EXTENSIONS,
            },
            performance: false,
            dev_server: profile.dev_server(),
        }
    }
}

impl BundlerManifest<'_> {
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid_value("manifest", e.to_string()))
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| ConfigError::invalid_value("manifest", e.to_string()))
    }
}

impl BuildProfile {
    /// Project this profile into the bundler's configuration record.
    pub fn manifest(&self) -> BundlerManifest<'_> {
        BundlerManifest::from(self)
    }
}

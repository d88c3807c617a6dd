//! Output filename layout.
//!
//! Production names embed a content fingerprint so browsers can cache them
//! forever; development names stay stable.

use serde::Serialize;

use crate::profile::Profile;

/// Placeholder the bundler replaces with a truncated content hash.
pub const FINGERPRINT: &str = "[contenthash:10]";

pub(crate) const CSS_NAME: &str = "static/css/[name].[contenthash:10].css";
pub(crate) const CSS_CHUNK_NAME: &str = "static/css/[name].[contenthash:10].chunk.css";

const ASSET_NAME: &str = "static/media/[hash:10][ext][query]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputLayout {
    pub js_name: String,
    pub chunk_name: String,
    pub asset_name: String,
}

impl OutputLayout {
    pub fn for_profile(profile: Profile) -> Self {
        let (js_name, chunk_name) = match profile {
            Profile::Production => (
                format!("static/js/[name].{FINGERPRINT}.js"),
                format!("static/js/[name].{FINGERPRINT}.chunk.js"),
            ),
            Profile::Development => (
                "static/js/[name].js".to_string(),
                "static/js/[name].chunk.js".to_string(),
            ),
        };
        Self {
            js_name,
            chunk_name,
            asset_name: ASSET_NAME.to_string(),
        }
    }

    pub fn is_fingerprinted(&self) -> bool {
        self.js_name.contains(FINGERPRINT) && self.chunk_name.contains(FINGERPRINT)
    }

    /// Script filename template for one entry point.
    ///
    /// ```
    /// use kiln_config::{OutputLayout, Profile};
    ///
    /// let dev = OutputLayout::for_profile(Profile::Development);
    /// assert_eq!(dev.entry_file("main"), "static/js/main.js");
    ///
    /// let prod = OutputLayout::for_profile(Profile::Production);
    /// assert_eq!(prod.entry_file("main"), "static/js/main.[contenthash:10].js");
    /// ```
    pub fn entry_file(&self, entry_name: &str) -> String {
        self.js_name.replace("[name]", entry_name)
    }

    pub fn chunk_file(&self, chunk_name: &str) -> String {
        self.chunk_name.replace("[name]", chunk_name)
    }
}

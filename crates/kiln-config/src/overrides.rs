//! Project-specific values layered over the built-in defaults.
//!
//! Overrides only change literal values (paths, ports, theme variables).
//! They never decide which steps or plugins are active; that stays a pure
//! function of the [`Profile`](crate::Profile).

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOverrides {
    /// Application entry point
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Directory holding application sources (scripts and lint context)
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Directory of static files copied verbatim into production output
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Production output directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template (defaults to `<public_dir>/index.html`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Lint result cache file
    #[serde(default = "default_lint_cache")]
    pub lint_cache: PathBuf,

    /// Images below this size (bytes) are inlined as data URLs
    #[serde(default = "default_inline_limit")]
    pub inline_limit: u64,

    /// Less variables forwarded as `modifyVars`
    #[serde(default = "default_theme")]
    pub theme: IndexMap<String, String>,

    #[serde(default)]
    pub dev_server: DevServerOverrides,
}

impl Default for ResolveOverrides {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            src_dir: default_src_dir(),
            public_dir: default_public_dir(),
            output_dir: default_output_dir(),
            template: None,
            lint_cache: default_lint_cache(),
            inline_limit: default_inline_limit(),
            theme: default_theme(),
            dev_server: DevServerOverrides::default(),
        }
    }
}

impl ResolveOverrides {
    pub fn template_path(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or_else(|| self.public_dir.join("index.html"))
    }

    /// Override the entry point.
    ///
    /// ```
    /// use kiln_config::ResolveOverrides;
    /// use std::path::PathBuf;
    ///
    /// let overrides = ResolveOverrides::default().with_entry("src/index.jsx");
    /// assert_eq!(overrides.entry, PathBuf::from("src/index.jsx"));
    /// ```
    pub fn with_entry(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entry = entry.into();
        self
    }

    pub fn with_theme_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme.insert(name.into(), value.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.dev_server.port = port;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOverrides {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_true")]
    pub open: bool,
}

impl Default for DevServerOverrides {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: true,
        }
    }
}

// Helper defaults
fn default_true() -> bool {
    true
}

fn default_entry() -> PathBuf {
    PathBuf::from("src/main.js")
}

fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_lint_cache() -> PathBuf {
    PathBuf::from("node_modules/.cache/.eslintcache")
}

fn default_inline_limit() -> u64 {
    10 * 1024
}

fn default_theme() -> IndexMap<String, String> {
    IndexMap::from([("@primary-color".to_string(), "#1DA57A".to_string())])
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    3003
}

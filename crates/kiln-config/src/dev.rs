//! Development server descriptor.

use serde::Serialize;

use crate::overrides::DevServerOverrides;

/// Settings handed to the bundler's dev server. Only present in development.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    pub host: String,
    pub port: u16,
    pub open: bool,
    /// Hot module replacement
    pub hot_reload: bool,
    /// Serve the HTML entry for unknown routes so client-side routing survives a refresh
    pub history_fallback: bool,
}

impl From<&DevServerOverrides> for DevServer {
    fn from(overrides: &DevServerOverrides) -> Self {
        Self {
            host: overrides.host.clone(),
            port: overrides.port,
            open: overrides.open,
            hot_reload: true,
            history_fallback: true,
        }
    }
}

impl DevServer {
    pub fn address(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

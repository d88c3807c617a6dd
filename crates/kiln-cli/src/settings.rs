//! Layered project settings for CLI commands.
//!
//! Priority, lowest first: built-in defaults < project file (base table with
//! the selected profile's table merged over it) < `KILN_*` environment
//! variables. Nested keys use a double underscore, so
//! `KILN_DEV_SERVER__PORT=4000` sets `dev_server.port`.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use kiln_config::{ConfigDiscovery, ConfigError, KilnConfig, Profile, ResolveOverrides, load_file};
use tracing::debug;

use crate::cli::ProfileArgs;
use crate::commands::utils::resolve_path;
use crate::error::{CliError, Result};

pub const ENV_PREFIX: &str = "KILN_";

/// Everything a command needs to resolve or validate a profile.
#[derive(Debug, Clone)]
pub struct ProjectSettings {
    pub root: PathBuf,
    pub profile: Profile,
    pub overrides: ResolveOverrides,
    /// File the overrides were read from, if any
    pub source: Option<PathBuf>,
}

impl ProjectSettings {
    /// Load settings for the given command-line options.
    ///
    /// An explicit `--profile` wins over `NODE_ENV`.
    pub fn load(args: &ProfileArgs) -> Result<Self> {
        let profile = match args.profile {
            Some(profile) => profile,
            None => Profile::from_env()?,
        };
        let root = args.root.clone();

        let (config, source) = match &args.config {
            Some(path) => {
                let path = resolve_path(path, &root);
                if !path.is_file() {
                    return Err(CliError::ConfigFileNotFound(path));
                }
                (load_file(&path)?, Some(path))
            }
            None => {
                let discovery = ConfigDiscovery::new(&root);
                let source = discovery.find();
                (discovery.load_or_default()?, source)
            }
        };

        let overrides = layer(&config, profile)?;
        debug!(
            profile = %profile,
            root = %root.display(),
            source = ?source,
            "loaded project settings"
        );

        Ok(Self {
            root,
            profile,
            overrides,
            source,
        })
    }

    pub fn source_display(&self) -> String {
        self.source
            .as_deref()
            .map(Path::display)
            .map(|path| path.to_string())
            .unwrap_or_else(|| "built-in defaults".to_string())
    }
}

/// Materialize `profile` from the file config and apply environment overrides.
pub fn layer(config: &KilnConfig, profile: Profile) -> Result<ResolveOverrides> {
    let materialized = config.materialize(profile)?;

    Figment::new()
        .merge(Serialized::defaults(materialized))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| {
            ConfigError::InvalidValue {
                field: "environment".to_string(),
                hint: Some(format!("{e}; check {ENV_PREFIX}* variables")),
            }
            .into()
        })
}

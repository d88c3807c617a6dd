//! Build profile resolution for Kiln.
//!
//! Given a [`Profile`] and optional [`ResolveOverrides`], the resolver
//! produces a complete, immutable [`BuildProfile`]: one transform chain per
//! asset category, the active plugins, the output naming scheme and the
//! chunk splitting and minimization policy. [`BuildProfile::manifest`]
//! projects it into the JSON record the bundler consumes.
//!
//! ```
//! use kiln_config::{resolve, AssetCategory};
//!
//! let profile = resolve("production", None).unwrap();
//! assert_eq!(
//!     profile.chain(AssetCategory::Less).unwrap().loaders(),
//!     vec![
//!         "mini-css-extract-plugin/loader",
//!         "css-loader",
//!         "postcss-loader",
//!         "less-loader"
//!     ]
//! );
//! ```

pub mod catalog;
pub mod chain;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod optimization;
pub mod output;
pub mod overrides;
pub mod pattern;
pub mod plugin;
pub mod profile;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use catalog::{AssetCategory, CATALOG, CategoryKind, CategoryRule, Preprocessor};
pub use chain::{TransformChain, TransformStep};
pub use config::{KilnConfig, ProfileConfig};
pub use dev::DevServer;
pub use error::{ConfigError, Result};
pub use manifest::BundlerManifest;
pub use optimization::{
    CacheGroup, ChunkSelection, Minimizer, MinimizerStep, OptimizationPolicy, RuntimeChunk,
    SplitChunks,
};
pub use output::{FINGERPRINT, OutputLayout};
pub use overrides::{DevServerOverrides, ResolveOverrides};
pub use pattern::Pattern;
pub use plugin::{Activation, PLUGIN_TABLE, Plugin, PluginKind, active_plugins, lint_rules};
pub use profile::{PROFILE_ENV_VAR, Profile};
pub use resolver::{
    BuildProfile, ENTRY_NAME, ProfileFields, Resolver, Rule, resolve, resolve_from_env,
};

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover, load_file};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};

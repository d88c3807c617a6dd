//! Build profile resolution.
//!
//! [`Resolver::resolve`] is a pure function of the profile and the
//! overrides: it walks the category catalog and the plugin table once and
//! assembles an immutable [`BuildProfile`]. No file system or network access
//! happens here; missing templates or broken sources are reported later by
//! the bundler that consumes the profile.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::{AssetCategory, CATALOG, CategoryKind};
use crate::chain::{ChainInputs, TransformChain, assemble};
use crate::dev::DevServer;
use crate::error::Result;
use crate::optimization::OptimizationPolicy;
use crate::output::OutputLayout;
use crate::overrides::ResolveOverrides;
use crate::pattern::Pattern;
use crate::plugin::{Plugin, PluginInputs, PluginKind, active_plugins};
use crate::profile::Profile;

/// Extensions the bundler tries when an import omits one.
pub const RESOLVE_EXTENSIONS: [&str; 3] = [".jsx", ".js", ".json"];

/// Chunk name the bundler gives a single unnamed entry.
pub const ENTRY_NAME: &str = "main";

/// One asset category's match rule and chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub id: AssetCategory,
    #[serde(rename = "match")]
    pub pattern: Pattern,
    /// Restricts the rule to application sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,
    pub chain: TransformChain,
}

/// Fields that exist for only one of the two profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFields {
    Production {
        /// Emitted files land here; the directory is cleaned first.
        output_dir: PathBuf,
    },
    Development {
        dev_server: DevServer,
    },
}

/// The resolved, immutable build configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildProfile {
    pub profile: Profile,
    pub entry: PathBuf,
    pub output: OutputLayout,
    /// Exactly one entry per catalog category, in catalog order.
    pub rules: IndexMap<AssetCategory, Rule>,
    /// Active plugins only, in table order.
    pub plugins: Vec<Plugin>,
    pub optimization: OptimizationPolicy,
    pub fields: ProfileFields,
}

impl BuildProfile {
    pub fn is_production(&self) -> bool {
        self.profile.is_production()
    }

    pub fn devtool(&self) -> &'static str {
        self.profile.devtool()
    }

    /// Entry name used in `[name]` placeholders.
    ///
    /// `entry` is handed over as a single path, so the bundler always calls
    /// the entry chunk [`ENTRY_NAME`] whatever the file is called.
    pub fn entry_name(&self) -> &'static str {
        ENTRY_NAME
    }

    pub fn chain(&self, category: AssetCategory) -> Option<&TransformChain> {
        self.rules.get(&category).map(|rule| &rule.chain)
    }

    pub fn plugin(&self, kind: PluginKind) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.kind == kind)
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugin(kind).is_some()
    }

    pub fn plugin_kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(|plugin| plugin.kind).collect()
    }

    pub fn dev_server(&self) -> Option<&DevServer> {
        match &self.fields {
            ProfileFields::Development { dev_server } => Some(dev_server),
            ProfileFields::Production { .. } => None,
        }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        match &self.fields {
            ProfileFields::Production { output_dir } => Some(output_dir),
            ProfileFields::Development { .. } => None,
        }
    }

    /// Emitted script name for the entry point.
    pub fn entry_file(&self) -> String {
        self.output.entry_file(self.entry_name())
    }
}

/// Resolves build profiles against a fixed set of overrides.
///
/// # Example
///
/// ```
/// use kiln_config::{AssetCategory, Profile, Resolver};
///
/// let profile = Resolver::default().resolve(Profile::Production);
/// assert!(profile.optimization.minimize());
/// assert_eq!(
///     profile.chain(AssetCategory::Sass).unwrap().tail().unwrap().loader,
///     "sass-loader"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    overrides: ResolveOverrides,
}

impl Resolver {
    pub fn new(overrides: ResolveOverrides) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &ResolveOverrides {
        &self.overrides
    }

    pub fn resolve(&self, profile: Profile) -> BuildProfile {
        build(profile, &self.overrides)
    }
}

/// Parse `selector` and resolve it.
///
/// An empty selector means development. Anything other than `production` or
/// `development` fails with
/// [`ConfigError::UnknownProfile`](crate::ConfigError::UnknownProfile) before
/// anything is built.
///
/// ```
/// use kiln_config::{resolve, ConfigError};
///
/// assert!(resolve("development", None).unwrap().dev_server().is_some());
/// assert!(matches!(resolve("staging", None), Err(ConfigError::UnknownProfile(_))));
/// ```
pub fn resolve(selector: &str, overrides: Option<&ResolveOverrides>) -> Result<BuildProfile> {
    let profile = Profile::from_selector(Some(selector))?;
    Ok(match overrides {
        Some(overrides) => build(profile, overrides),
        None => build(profile, &ResolveOverrides::default()),
    })
}

/// Select the profile from `NODE_ENV` and resolve it.
pub fn resolve_from_env(overrides: Option<&ResolveOverrides>) -> Result<BuildProfile> {
    let profile = Profile::from_env()?;
    Ok(match overrides {
        Some(overrides) => build(profile, overrides),
        None => build(profile, &ResolveOverrides::default()),
    })
}

fn build(profile: Profile, overrides: &ResolveOverrides) -> BuildProfile {
    let chain_inputs = ChainInputs {
        inline_limit: overrides.inline_limit,
        theme: &overrides.theme,
    };

    let rules: IndexMap<AssetCategory, Rule> = CATALOG
        .iter()
        .map(|rule| {
            let include = match rule.kind {
                CategoryKind::Script => Some(overrides.src_dir.clone()),
                _ => None,
            };
            let resolved = Rule {
                id: rule.category,
                pattern: rule.category.pattern().clone(),
                include,
                chain: assemble(rule, profile, &chain_inputs),
            };
            trace!(category = %rule.category, loaders = ?resolved.chain.loaders(), "assembled chain");
            (rule.category, resolved)
        })
        .collect();

    let template = overrides.template_path();
    let plugin_inputs = PluginInputs {
        src_dir: &overrides.src_dir,
        public_dir: &overrides.public_dir,
        output_dir: &overrides.output_dir,
        template: &template,
        lint_cache: &overrides.lint_cache,
    };
    let plugins: Vec<Plugin> = active_plugins(profile)
        .map(|kind| Plugin::configure(kind, &plugin_inputs))
        .collect();

    let fields = match profile {
        Profile::Production => ProfileFields::Production {
            output_dir: overrides.output_dir.clone(),
        },
        Profile::Development => ProfileFields::Development {
            dev_server: DevServer::from(&overrides.dev_server),
        },
    };

    let resolved = BuildProfile {
        profile,
        entry: overrides.entry.clone(),
        output: OutputLayout::for_profile(profile),
        rules,
        plugins,
        optimization: OptimizationPolicy::for_profile(profile),
        fields,
    };

    debug!(
        profile = %profile,
        rules = resolved.rules.len(),
        plugins = ?resolved.plugin_kinds(),
        minimizers = resolved.optimization.minimizers.len(),
        "resolved build profile"
    );

    resolved
}

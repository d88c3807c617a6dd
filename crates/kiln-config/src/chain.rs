//! Transform steps and the chains assembled from them.
//!
//! Chains are stored in the bundler's `use` order: the emission step comes
//! first and the preprocessor last. The bundler applies the list right to
//! left, so the step nearest the source runs first.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::catalog::{CategoryKind, CategoryRule, Preprocessor};
use crate::profile::Profile;

pub const STYLE_LOADER: &str = "style-loader";
pub const EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";
pub const CSS_LOADER: &str = "css-loader";
pub const POSTCSS_LOADER: &str = "postcss-loader";
pub const BABEL_LOADER: &str = "babel-loader";
pub const INLINE_ASSET: &str = "asset";
pub const RESOURCE_ASSET: &str = "asset/resource";

/// One named transform and its options record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformStep {
    pub loader: String,
    #[serde(default, skip_serializing_if = "is_empty_options")]
    pub options: Value,
}

impl TransformStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

fn is_empty_options(options: &Value) -> bool {
    match options {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Ordered transforms for one asset category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformChain(Vec<TransformStep>);

impl TransformChain {
    pub fn new(steps: Vec<TransformStep>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Step applied last (the emission end).
    pub fn head(&self) -> Option<&TransformStep> {
        self.0.first()
    }

    /// Step applied first (the source end).
    pub fn tail(&self) -> Option<&TransformStep> {
        self.0.last()
    }

    pub fn loaders(&self) -> Vec<&str> {
        self.0.iter().map(|step| step.loader.as_str()).collect()
    }

    pub fn contains(&self, loader: &str) -> bool {
        self.0.iter().any(|step| step.loader == loader)
    }

    pub fn step(&self, loader: &str) -> Option<&TransformStep> {
        self.0.iter().find(|step| step.loader == loader)
    }
}

/// Values a chain needs beyond the profile.
pub(crate) struct ChainInputs<'a> {
    pub inline_limit: u64,
    pub theme: &'a IndexMap<String, String>,
}

/// Assemble the chain for one catalog row.
pub(crate) fn assemble(rule: &CategoryRule, profile: Profile, inputs: &ChainInputs<'_>) -> TransformChain {
    let steps = match rule.kind {
        CategoryKind::Stylesheet { preprocessor } => {
            let mut steps = Vec::with_capacity(4);
            steps.push(style_head(profile));
            steps.extend(stylesheet_base());
            steps.extend(preprocessor.map(|pre| preprocessor_step(pre, inputs.theme)));
            steps
        }
        CategoryKind::InlineAsset => vec![TransformStep::with_options(
            INLINE_ASSET,
            json!({ "parser": { "dataUrlCondition": { "maxSize": inputs.inline_limit } } }),
        )],
        CategoryKind::Resource => vec![TransformStep::new(RESOURCE_ASSET)],
        CategoryKind::Script => vec![script_step(profile)],
    };
    TransformChain::new(steps)
}

/// Stylesheet emission step: injected `<style>` tags during development,
/// extracted `.css` files in production.
fn style_head(profile: Profile) -> TransformStep {
    match profile {
        Profile::Development => TransformStep::new(STYLE_LOADER),
        Profile::Production => TransformStep::new(EXTRACT_LOADER),
    }
}

fn stylesheet_base() -> [TransformStep; 2] {
    [
        TransformStep::new(CSS_LOADER),
        // browser targets come from the project's browserslist
        TransformStep::with_options(
            POSTCSS_LOADER,
            json!({ "postcssOptions": { "plugins": ["postcss-preset-env"] } }),
        ),
    ]
}

fn preprocessor_step(preprocessor: Preprocessor, theme: &IndexMap<String, String>) -> TransformStep {
    match preprocessor {
        Preprocessor::Less => TransformStep::with_options(
            preprocessor.loader(),
            json!({
                "lessOptions": {
                    "modifyVars": theme,
                    "javascriptEnabled": true,
                }
            }),
        ),
        Preprocessor::Sass | Preprocessor::Stylus => TransformStep::new(preprocessor.loader()),
    }
}

fn script_step(profile: Profile) -> TransformStep {
    let plugins: &[&str] = match profile {
        Profile::Development => &["react-refresh/babel"],
        Profile::Production => &[],
    };
    TransformStep::with_options(
        BABEL_LOADER,
        json!({
            "cacheDirectory": true,
            "cacheCompression": false,
            "plugins": plugins,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetCategory;

    fn inputs(theme: &IndexMap<String, String>) -> ChainInputs<'_> {
        ChainInputs {
            inline_limit: 4096,
            theme,
        }
    }

    #[test]
    fn stylesheet_head_follows_profile() {
        let theme = IndexMap::new();
        let dev = assemble(AssetCategory::Css.rule(), Profile::Development, &inputs(&theme));
        let prod = assemble(AssetCategory::Css.rule(), Profile::Production, &inputs(&theme));

        assert_eq!(dev.loaders(), vec![STYLE_LOADER, CSS_LOADER, POSTCSS_LOADER]);
        assert_eq!(prod.loaders(), vec![EXTRACT_LOADER, CSS_LOADER, POSTCSS_LOADER]);
    }

    #[test]
    fn less_step_carries_theme() {
        let theme = IndexMap::from([("@primary-color".to_string(), "#000".to_string())]);
        let chain = assemble(AssetCategory::Less.rule(), Profile::Production, &inputs(&theme));

        let less = chain.tail().unwrap();
        assert_eq!(less.loader, "less-loader");
        assert_eq!(
            less.options["lessOptions"]["modifyVars"]["@primary-color"],
            "#000"
        );
        assert_eq!(less.options["lessOptions"]["javascriptEnabled"], true);
    }

    #[test]
    fn image_inline_limit_is_forwarded() {
        let theme = IndexMap::new();
        let chain = assemble(AssetCategory::Image.rule(), Profile::Development, &inputs(&theme));
        assert_eq!(chain.len(), 1);
        assert_eq!(
            chain.head().unwrap().options["parser"]["dataUrlCondition"]["maxSize"],
            4096
        );
    }

    #[test]
    fn script_refresh_plugin_only_in_development() {
        let theme = IndexMap::new();
        let dev = assemble(AssetCategory::Script.rule(), Profile::Development, &inputs(&theme));
        let prod = assemble(AssetCategory::Script.rule(), Profile::Production, &inputs(&theme));

        assert_eq!(dev.head().unwrap().options["plugins"], json!(["react-refresh/babel"]));
        assert_eq!(prod.head().unwrap().options["plugins"], json!([]));
        assert_eq!(prod.head().unwrap().options["cacheDirectory"], true);
    }

    #[test]
    fn empty_options_are_not_serialized() {
        let value = serde_json::to_value(TransformStep::new(CSS_LOADER)).unwrap();
        assert_eq!(value, json!({ "loader": "css-loader" }));
    }
}

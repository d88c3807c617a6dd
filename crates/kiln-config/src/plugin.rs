//! Build plugins and their activation table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::output::{CSS_CHUNK_NAME, CSS_NAME};
use crate::profile::Profile;

/// Known build-time extensions. Serialized as the package name the bundler loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginKind {
    /// Lints sources during the build; lint errors fail the build.
    #[serde(rename = "eslint-webpack-plugin")]
    Lint,
    /// Renders the HTML template with the emitted bundles injected.
    #[serde(rename = "html-webpack-plugin")]
    Html,
    /// Moves stylesheets out of scripts into `.css` files.
    #[serde(rename = "mini-css-extract-plugin")]
    CssExtract,
    /// Copies the public directory (minus the template) into the output.
    #[serde(rename = "copy-webpack-plugin")]
    CopyStatic,
    /// React fast refresh.
    #[serde(rename = "@pmmmwh/react-refresh-webpack-plugin")]
    HotReload,
}

impl PluginKind {
    pub fn package(self) -> &'static str {
        match self {
            PluginKind::Lint => "eslint-webpack-plugin",
            PluginKind::Html => "html-webpack-plugin",
            PluginKind::CssExtract => "mini-css-extract-plugin",
            PluginKind::CopyStatic => "copy-webpack-plugin",
            PluginKind::HotReload => "@pmmmwh/react-refresh-webpack-plugin",
        }
    }
}

/// When a plugin participates in a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Always,
    Only(Profile),
}

impl Activation {
    pub fn applies(self, profile: Profile) -> bool {
        match self {
            Activation::Always => true,
            Activation::Only(only) => only == profile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginRule {
    pub kind: PluginKind,
    pub activation: Activation,
}

/// Declaration order is plugin order in the resolved profile.
pub static PLUGIN_TABLE: [PluginRule; 5] = [
    PluginRule {
        kind: PluginKind::Lint,
        activation: Activation::Always,
    },
    PluginRule {
        kind: PluginKind::Html,
        activation: Activation::Always,
    },
    PluginRule {
        kind: PluginKind::CssExtract,
        activation: Activation::Only(Profile::Production),
    },
    PluginRule {
        kind: PluginKind::CopyStatic,
        activation: Activation::Only(Profile::Production),
    },
    PluginRule {
        kind: PluginKind::HotReload,
        activation: Activation::Only(Profile::Development),
    },
];

/// Plugin kinds active for `profile`, in table order.
pub fn active_plugins(profile: Profile) -> impl Iterator<Item = PluginKind> {
    PLUGIN_TABLE
        .iter()
        .filter(move |rule| rule.activation.applies(profile))
        .map(|rule| rule.kind)
}

/// An active plugin with its configuration record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugin {
    #[serde(rename = "name")]
    pub kind: PluginKind,
    pub options: Value,
}

/// Lint rules handed to the lint engine, identical for both profiles.
pub fn lint_rules() -> Value {
    json!({
        "extends": ["react-app"],
        "parserOptions": {
            "babelOptions": {
                "presets": [
                    ["babel-preset-react-app", false],
                    "babel-preset-react-app/prod",
                ],
            },
        },
    })
}

/// Paths the plugin options refer to.
///
/// Options are plain JSON, so paths go in as lossy UTF-8 text; a path that
/// is not valid UTF-8 never fails resolution.
pub(crate) struct PluginInputs<'a> {
    pub src_dir: &'a Path,
    pub public_dir: &'a Path,
    pub output_dir: &'a Path,
    pub template: &'a Path,
    pub lint_cache: &'a Path,
}

impl Plugin {
    pub(crate) fn configure(kind: PluginKind, inputs: &PluginInputs<'_>) -> Self {
        let options = match kind {
            PluginKind::Lint => json!({
                "context": inputs.src_dir.to_string_lossy(),
                "exclude": "node_modules",
                "cache": true,
                "cacheLocation": inputs.lint_cache.to_string_lossy(),
                "overrideConfig": lint_rules(),
            }),
            PluginKind::Html => json!({ "template": inputs.template.to_string_lossy() }),
            PluginKind::CssExtract => json!({
                "filename": CSS_NAME,
                "chunkFilename": CSS_CHUNK_NAME,
            }),
            PluginKind::CopyStatic => json!({
                "patterns": [{
                    "from": inputs.public_dir.to_string_lossy(),
                    "to": inputs.output_dir.to_string_lossy(),
                    "globOptions": { "ignore": ["**/index.html"] },
                }]
            }),
            PluginKind::HotReload => json!({}),
        };
        Self { kind, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_plugins_are_always_active() {
        for profile in Profile::ALL {
            let active: Vec<_> = active_plugins(profile).collect();
            assert_eq!(&active[..2], &[PluginKind::Lint, PluginKind::Html]);
        }
    }

    #[test]
    fn activation_is_repeatable() {
        for profile in Profile::ALL {
            let first: Vec<_> = active_plugins(profile).collect();
            let second: Vec<_> = active_plugins(profile).collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn profile_specific_plugins_never_overlap() {
        let dev: Vec<_> = active_plugins(Profile::Development).collect();
        let prod: Vec<_> = active_plugins(Profile::Production).collect();

        assert_eq!(
            dev,
            vec![PluginKind::Lint, PluginKind::Html, PluginKind::HotReload]
        );
        assert_eq!(
            prod,
            vec![
                PluginKind::Lint,
                PluginKind::Html,
                PluginKind::CssExtract,
                PluginKind::CopyStatic
            ]
        );
    }

    #[test]
    fn serialized_name_is_the_package() {
        for rule in &PLUGIN_TABLE {
            assert_eq!(
                serde_json::to_value(rule.kind).unwrap(),
                json!(rule.kind.package())
            );
        }
    }

    fn inputs<'a>(src_dir: &'a Path) -> PluginInputs<'a> {
        PluginInputs {
            src_dir,
            public_dir: Path::new("public"),
            output_dir: Path::new("dist"),
            template: Path::new("public/index.html"),
            lint_cache: Path::new("node_modules/.cache/.eslintcache"),
        }
    }

    #[test]
    fn options_carry_paths_as_text() {
        let inputs = inputs(Path::new("src"));
        let lint = Plugin::configure(PluginKind::Lint, &inputs);
        assert_eq!(lint.options["context"], "src");
        assert_eq!(lint.options["cacheLocation"], "node_modules/.cache/.eslintcache");

        let copy = Plugin::configure(PluginKind::CopyStatic, &inputs);
        assert_eq!(copy.options["patterns"][0]["from"], "public");
        assert_eq!(copy.options["patterns"][0]["to"], "dist");
    }

    #[test]
    fn lint_plugin_carries_react_app_rules() {
        let lint = Plugin::configure(PluginKind::Lint, &inputs(Path::new("src")));
        let rules = &lint.options["overrideConfig"];
        assert_eq!(rules["extends"], json!(["react-app"]));
        assert_eq!(
            rules["parserOptions"]["babelOptions"]["presets"][1],
            "babel-preset-react-app/prod"
        );
        assert_eq!(*rules, lint_rules());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_replaced_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let src_dir = Path::new(OsStr::from_bytes(b"src\xff"));
        let lint = Plugin::configure(PluginKind::Lint, &inputs(src_dir));
        assert_eq!(lint.options["context"], "src\u{FFFD}");
    }

    #[test]
    fn serializes_as_name_and_options() {
        let plugin = Plugin {
            kind: PluginKind::HotReload,
            options: json!({}),
        };
        assert_eq!(
            serde_json::to_value(&plugin).unwrap(),
            json!({ "name": "@pmmmwh/react-refresh-webpack-plugin", "options": {} })
        );
    }
}

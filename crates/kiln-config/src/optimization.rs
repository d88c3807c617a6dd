//! Chunk splitting and minimization policy.
//!
//! Production builds split third-party code into ranked cache groups, emit a
//! runtime chunk per entry point and run the minimizer chain. Development
//! keeps the bundler's default grouping and never minimizes.

use std::cmp::Reverse;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::pattern::Pattern;
use crate::profile::Profile;

/// Which chunks the splitter may pull modules out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    #[default]
    All,
    Async,
    Initial,
}

/// Named bucket grouping third-party modules into one shared chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheGroup {
    pub name: String,
    #[serde(rename = "match")]
    pub pattern: Pattern,
    /// Higher wins when more than one group matches a module.
    pub priority: i32,
}

impl CacheGroup {
    pub fn matches(&self, module_path: &str) -> bool {
        self.pattern.is_match(module_path)
    }
}

struct CacheGroupSpec {
    name: &'static str,
    pattern: &'static str,
    priority: i32,
}

const CACHE_GROUP_TABLE: [CacheGroupSpec; 3] = [
    // react, react-dom and react-router-dom share one chunk
    CacheGroupSpec {
        name: "chunk-react",
        pattern: r"[\\/]node_modules[\\/]react(.*)?[\\/]",
        priority: 40,
    },
    CacheGroupSpec {
        name: "chunk-antd",
        pattern: r"[\\/]node_modules[\\/]antd[\\/]",
        priority: 30,
    },
    CacheGroupSpec {
        name: "chunk-libs",
        pattern: r"[\\/]node_modules[\\/]",
        priority: 20,
    },
];

static PRODUCTION_GROUPS: LazyLock<Vec<CacheGroup>> = LazyLock::new(|| {
    CACHE_GROUP_TABLE
        .iter()
        .map(|spec| CacheGroup {
            name: spec.name.to_string(),
            pattern: Pattern::builtin(spec.pattern),
            priority: spec.priority,
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
    /// Sorted by descending priority.
    #[serde(rename = "groups")]
    pub cache_groups: Vec<CacheGroup>,
}

impl SplitChunks {
    pub fn new(chunks: ChunkSelection, mut cache_groups: Vec<CacheGroup>) -> Self {
        cache_groups.sort_by_key(|group| Reverse(group.priority));
        Self {
            chunks,
            cache_groups,
        }
    }

    /// The group a third-party module lands in, if any.
    ///
    /// Groups are tried from the highest priority down and the first match
    /// wins, so `node_modules/react-dom/…` goes to the framework group even
    /// though the catch-all pattern matches it too.
    pub fn group_for(&self, module_path: &str) -> Option<&CacheGroup> {
        self.cache_groups
            .iter()
            .find(|group| group.matches(module_path))
    }
}

/// Runtime chunk naming: one `runtime~<entry>` chunk per entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeChunk;

impl RuntimeChunk {
    pub const PREFIX: &'static str = "runtime~";

    pub fn name_for(self, entry_name: &str) -> String {
        format!("{}{entry_name}", Self::PREFIX)
    }
}

impl Serialize for RuntimeChunk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name_for("[name]"))
    }
}

/// Post-transform compaction steps. Each one handles a disjoint asset type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Minimizer {
    #[serde(rename = "css-minimizer-webpack-plugin")]
    Stylesheet,
    #[serde(rename = "terser-webpack-plugin")]
    Script,
    #[serde(rename = "image-minimizer-webpack-plugin")]
    Image,
}

impl Minimizer {
    /// Fixed order, kept stable for deterministic output and logs.
    pub const CHAIN: [Minimizer; 3] = [Minimizer::Stylesheet, Minimizer::Script, Minimizer::Image];

    fn options(self) -> Value {
        match self {
            Minimizer::Stylesheet | Minimizer::Script => json!({}),
            Minimizer::Image => json!({
                "minimizer": {
                    "implementation": "imageminGenerate",
                    "options": {
                        "plugins": [
                            ["gifsicle", { "interlaced": true }],
                            ["jpegtran", { "progressive": true }],
                            ["optipng", { "optimizationLevel": 5 }],
                            ["svgo", {
                                "plugins": [
                                    "preset-default",
                                    "prefixIds",
                                    { "name": "sortAttrs", "params": { "xmlnsOrder": "alphabetical" } }
                                ]
                            }]
                        ]
                    }
                }
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimizerStep {
    #[serde(rename = "name")]
    pub kind: Minimizer,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    pub split_chunks: SplitChunks,
    #[serde(rename = "runtimeChunkNaming", skip_serializing_if = "Option::is_none")]
    pub runtime_chunk: Option<RuntimeChunk>,
    pub minimizers: Vec<MinimizerStep>,
}

impl OptimizationPolicy {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Production => Self {
                split_chunks: SplitChunks::new(ChunkSelection::All, PRODUCTION_GROUPS.clone()),
                runtime_chunk: Some(RuntimeChunk),
                minimizers: Minimizer::CHAIN
                    .into_iter()
                    .map(|kind| MinimizerStep {
                        kind,
                        options: kind.options(),
                    })
                    .collect(),
            },
            Profile::Development => Self {
                split_chunks: SplitChunks::new(ChunkSelection::All, Vec::new()),
                runtime_chunk: None,
                minimizers: Vec::new(),
            },
        }
    }

    pub fn minimize(&self) -> bool {
        !self.minimizers.is_empty()
    }

    pub fn minimizer_kinds(&self) -> Vec<Minimizer> {
        self.minimizers.iter().map(|step| step.kind).collect()
    }

    pub fn group_for(&self, module_path: &str) -> Option<&CacheGroup> {
        self.split_chunks.group_for(module_path)
    }

    /// Name of the runtime chunk split out for `entry_name`, production only.
    pub fn runtime_chunk_for(&self, entry_name: &str) -> Option<String> {
        self.runtime_chunk.map(|chunk| chunk.name_for(entry_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production() -> OptimizationPolicy {
        OptimizationPolicy::for_profile(Profile::Production)
    }

    #[test]
    fn builtin_patterns_compile() {
        for (group, spec) in production().split_chunks.cache_groups.iter().zip(&CACHE_GROUP_TABLE) {
            assert_eq!(group.pattern.as_str(), spec.pattern);
        }
    }

    #[test]
    fn framework_beats_catch_all() {
        let policy = production();
        for path in [
            "/app/node_modules/react/index.js",
            "/app/node_modules/react-dom/client.js",
            "C:\\app\\node_modules\\react-router-dom\\index.js",
        ] {
            assert_eq!(policy.group_for(path).unwrap().name, "chunk-react", "{path}");
        }
    }

    #[test]
    fn component_library_beats_catch_all() {
        let group = production()
            .group_for("/app/node_modules/antd/es/button/index.js")
            .unwrap()
            .name
            .clone();
        assert_eq!(group, "chunk-antd");
    }

    #[test]
    fn other_dependencies_fall_through() {
        let policy = production();
        assert_eq!(
            policy.group_for("/app/node_modules/lodash/map.js").unwrap().name,
            "chunk-libs"
        );
        assert!(policy.group_for("/app/src/App.jsx").is_none());
    }

    #[test]
    fn groups_are_sorted_by_priority_even_when_declared_out_of_order() {
        let low = CacheGroup {
            name: "low".into(),
            pattern: Pattern::builtin(r"lib"),
            priority: 1,
        };
        let high = CacheGroup {
            name: "high".into(),
            pattern: Pattern::builtin(r"lib"),
            priority: 9,
        };
        let split = SplitChunks::new(ChunkSelection::All, vec![low, high]);
        assert_eq!(split.group_for("lib/x.js").unwrap().name, "high");
    }

    #[test]
    fn development_has_no_groups_runtime_or_minimizers() {
        let policy = OptimizationPolicy::for_profile(Profile::Development);
        assert_eq!(policy.split_chunks.chunks, ChunkSelection::All);
        assert!(policy.split_chunks.cache_groups.is_empty());
        assert!(policy.runtime_chunk.is_none());
        assert!(!policy.minimize());
        assert!(policy.runtime_chunk_for("main").is_none());
    }

    #[test]
    fn production_minimizer_order_is_fixed() {
        assert_eq!(
            production().minimizer_kinds(),
            vec![Minimizer::Stylesheet, Minimizer::Script, Minimizer::Image]
        );
        assert_eq!(production().runtime_chunk_for("main").unwrap(), "runtime~main");
    }

    #[test]
    fn runtime_chunk_serializes_as_template() {
        assert_eq!(
            serde_json::to_value(RuntimeChunk).unwrap(),
            json!("runtime~[name]")
        );
    }
}

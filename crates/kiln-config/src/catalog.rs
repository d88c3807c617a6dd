//! Static catalog of asset categories.
//!
//! Each row names a class of source file, the pattern the bundler uses to
//! recognize it and the kind of chain it receives. The resolver walks this
//! table once, in order, to build the category → chain mapping.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// A class of source file with its own transform chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Css,
    Less,
    Sass,
    Stylus,
    Image,
    Font,
    Script,
}

impl AssetCategory {
    /// Catalog order.
    pub const ALL: [AssetCategory; 7] = [
        AssetCategory::Css,
        AssetCategory::Less,
        AssetCategory::Sass,
        AssetCategory::Stylus,
        AssetCategory::Image,
        AssetCategory::Font,
        AssetCategory::Script,
    ];

    pub fn id(self) -> &'static str {
        self.rule().id
    }

    pub fn rule(self) -> &'static CategoryRule {
        // CATALOG is indexed in the same order as ALL
        &CATALOG[self as usize]
    }

    /// Compiled form of the category's match pattern.
    pub fn pattern(self) -> &'static Pattern {
        &COMPILED[self as usize]
    }

    pub fn is_stylesheet(self) -> bool {
        matches!(self.rule().kind, CategoryKind::Stylesheet { .. })
    }

    pub fn preprocessor(self) -> Option<Preprocessor> {
        match self.rule().kind {
            CategoryKind::Stylesheet { preprocessor } => preprocessor,
            _ => None,
        }
    }

    /// Find the first category whose pattern matches `path`.
    ///
    /// ```
    /// use kiln_config::AssetCategory;
    ///
    /// assert_eq!(AssetCategory::classify("src/App.less"), Some(AssetCategory::Less));
    /// assert_eq!(AssetCategory::classify("src/theme.sass"), Some(AssetCategory::Sass));
    /// assert_eq!(AssetCategory::classify("README.md"), None);
    /// ```
    pub fn classify(path: &str) -> Option<AssetCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.pattern().is_match(path))
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Style preprocessor appended at the source end of a stylesheet chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preprocessor {
    Less,
    Sass,
    Stylus,
}

impl Preprocessor {
    pub fn loader(self) -> &'static str {
        match self {
            Preprocessor::Less => "less-loader",
            Preprocessor::Sass => "sass-loader",
            Preprocessor::Stylus => "stylus-loader",
        }
    }
}

/// How a category's chain is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Head step (profile dependent) + shared css base + optional preprocessor.
    Stylesheet { preprocessor: Option<Preprocessor> },
    /// Built-in asset module, inlined as a data URL below the size limit.
    InlineAsset,
    /// Built-in asset module, always emitted as a separate file.
    Resource,
    /// Transpiled application script, restricted to the source directory.
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: AssetCategory,
    pub id: &'static str,
    pub pattern: &'static str,
    pub kind: CategoryKind,
}

pub static CATALOG: [CategoryRule; 7] = [
    CategoryRule {
        category: AssetCategory::Css,
        id: "css",
        pattern: r"\.css$",
        kind: CategoryKind::Stylesheet { preprocessor: None },
    },
    CategoryRule {
        category: AssetCategory::Less,
        id: "less",
        pattern: r"\.less$",
        kind: CategoryKind::Stylesheet {
            preprocessor: Some(Preprocessor::Less),
        },
    },
    CategoryRule {
        category: AssetCategory::Sass,
        id: "sass",
        pattern: r"\.s[ac]ss$",
        kind: CategoryKind::Stylesheet {
            preprocessor: Some(Preprocessor::Sass),
        },
    },
    CategoryRule {
        category: AssetCategory::Stylus,
        id: "stylus",
        pattern: r"\.styl$",
        kind: CategoryKind::Stylesheet {
            preprocessor: Some(Preprocessor::Stylus),
        },
    },
    CategoryRule {
        category: AssetCategory::Image,
        id: "image",
        pattern: r"\.(jpe?g|png|gif|webp|svg)",
        kind: CategoryKind::InlineAsset,
    },
    CategoryRule {
        category: AssetCategory::Font,
        id: "font",
        pattern: r"\.(woff2?|ttf)",
        kind: CategoryKind::Resource,
    },
    CategoryRule {
        category: AssetCategory::Script,
        id: "script",
        pattern: r"\.jsx?$",
        kind: CategoryKind::Script,
    },
];

static COMPILED: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .map(|rule| Pattern::builtin(rule.pattern))
        .collect()
});

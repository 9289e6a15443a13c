//! Graph Analyzer Port
//!
//! The module graph is computed by an external analyzer (madge or an
//! equivalent). The analyzer keys modules by paths relative to a base
//! directory; `DependencyGraph` translates those keys back to absolute paths.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AnisotropicResult;

/// Source extensions recognized by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// ES module parsing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Es6Options {
    /// Accept files that mix `import` and `require`.
    #[serde(default)]
    pub mixed_imports: bool,
}

/// Parser options forwarded to the analyzer's import detectives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectiveOptions {
    pub es6: Es6Options,
}

impl Default for DetectiveOptions {
    fn default() -> Self {
        Self {
            es6: Es6Options {
                mixed_imports: true,
            },
        }
    }
}

/// Graph construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// Follow imports into installed packages.
    pub include_npm: bool,
    /// Extensions (without the dot) of files taking part in the graph.
    pub file_extensions: Vec<String>,
    pub detective_options: DetectiveOptions,
}

impl GraphOptions {
    /// Returns true when `path` carries one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.file_extensions.iter().any(|e| e == ext))
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            include_npm: true,
            file_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            detective_options: DetectiveOptions::default(),
        }
    }
}

/// A module graph produced by the analyzer for one entry file.
pub trait ModuleGraph: Send + Sync {
    /// Directory the module keys are relative to.
    fn base_dir(&self) -> &Path;

    /// Every module reached from the entry, mapped to its direct imports.
    fn as_mapping(&self) -> &IndexMap<String, Vec<String>>;

    /// Import chain leading from `referrer` to `candidate`.
    ///
    /// Empty when `candidate` is unreachable.
    fn depends_on(&self, referrer: &str, candidate: &str) -> Vec<String>;
}

/// Builds module graphs.
///
/// Implementations:
/// - `MadgeJsonAnalyzer` - reads madge's JSON dependency output
pub trait GraphAnalyzer: Send + Sync {
    /// Traverse imports starting at `entry`.
    ///
    /// Fails with `GraphBuild` when the entry cannot be parsed or resolved.
    fn build(&self, entry: &Path, options: &GraphOptions)
        -> AnisotropicResult<Box<dyn ModuleGraph>>;
}

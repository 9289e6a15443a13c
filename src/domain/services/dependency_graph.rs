//! Dependency graph adapter
//!
//! Wraps a `ModuleGraph` and speaks absolute paths only. The analyzer's
//! relative-key convention stays inside this module.

use std::path::{Path, PathBuf};

use crate::domain::ports::{GraphAnalyzer, GraphOptions, ModuleGraph};
use crate::domain::value_objects::{join_normalized, normalize, to_slash_key};
use crate::error::AnisotropicResult;

/// Module graph of one entry file, valid for one transform call.
pub struct DependencyGraph {
    entry: PathBuf,
    inner: Box<dyn ModuleGraph>,
}

impl DependencyGraph {
    /// Ask the analyzer for the graph rooted at `entry`.
    pub fn build(
        analyzer: &dyn GraphAnalyzer,
        entry: &Path,
        options: &GraphOptions,
    ) -> AnisotropicResult<Self> {
        let inner = analyzer.build(entry, options)?;
        Ok(Self::from_module_graph(entry, inner))
    }

    pub fn from_module_graph(entry: &Path, inner: Box<dyn ModuleGraph>) -> Self {
        Self {
            entry: normalize(entry),
            inner,
        }
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn is_empty(&self) -> bool {
        self.inner.as_mapping().is_empty()
    }

    /// Absolute paths of every module in the graph, in analyzer order.
    pub fn direct_dependents(&self) -> Vec<PathBuf> {
        let base = self.inner.base_dir();
        self.inner
            .as_mapping()
            .keys()
            .map(|key| join_normalized(base, Path::new(key)))
            .collect()
    }

    /// Returns true iff `candidate` is reachable from `referrer`.
    pub fn depends_on(&self, referrer: &Path, candidate: &Path) -> bool {
        let (Some(referrer), Some(candidate)) = (self.key_for(referrer), self.key_for(candidate))
        else {
            return false;
        };
        if !self.inner.as_mapping().contains_key(&referrer) {
            return false;
        }
        !self.inner.depends_on(&referrer, &candidate).is_empty()
    }

    /// Translate an absolute path into the analyzer's key space.
    fn key_for(&self, path: &Path) -> Option<String> {
        let base = normalize(self.inner.base_dir());
        pathdiff::diff_paths(normalize(path), base).map(|relative| to_slash_key(&relative))
    }
}

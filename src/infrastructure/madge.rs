//! Graph analyzer backed by madge's JSON output
//!
//! `madge --json` prints one object mapping every module to its direct
//! imports, keyed by paths relative to the directory madge ran in:
//!
//! ```json
//! { "src/app.js": ["node_modules/lib/index.js"], "node_modules/lib/index.js": [] }
//! ```
//!
//! `MadgeJsonAnalyzer` loads that project-wide mapping once. Each `build`
//! cuts out the part reachable from the entry and re-keys it relative to
//! the entry's directory, which is how madge reports a single-file graph.
//! Like madge, `fileExtensions` filters the modules found while walking,
//! never the entry it was handed.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::domain::ports::{GraphAnalyzer, GraphOptions, ModuleGraph};
use crate::domain::value_objects::{
    is_under_root, join_normalized, normalize, to_slash_key, PACKAGES_DIR,
};
use crate::error::{AnisotropicError, AnisotropicResult};

/// Project-wide dependency mapping with absolute keys.
#[derive(Debug, Clone)]
pub struct MadgeJsonAnalyzer {
    base_dir: PathBuf,
    packages_root: PathBuf,
    mapping: IndexMap<PathBuf, Vec<PathBuf>>,
}

impl MadgeJsonAnalyzer {
    /// Wrap a mapping whose keys are relative to `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>, raw: IndexMap<String, Vec<String>>) -> Self {
        let base_dir = normalize(base_dir.as_ref());
        let absolute = |key: &str| join_normalized(&base_dir, Path::new(key));

        let mapping = raw
            .iter()
            .map(|(key, deps)| {
                let deps = deps.iter().map(|d| absolute(d.as_str())).collect();
                (absolute(key.as_str()), deps)
            })
            .collect();

        let packages_root = base_dir.join(PACKAGES_DIR);
        Self {
            base_dir,
            packages_root,
            mapping,
        }
    }

    /// Dependencies under this directory are dropped when `includeNpm` is off.
    /// Defaults to `<base_dir>/node_modules`.
    pub fn with_packages_root(mut self, packages_root: impl AsRef<Path>) -> Self {
        self.packages_root = join_normalized(&self.base_dir, packages_root.as_ref());
        self
    }

    pub fn from_json_str(base_dir: impl AsRef<Path>, json: &str) -> AnisotropicResult<Self> {
        let raw: IndexMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| AnisotropicError::GraphBuild {
                entry: base_dir.as_ref().to_path_buf(),
                message: format!("malformed madge output: {}", e),
            })?;
        Ok(Self::new(base_dir, raw))
    }

    /// Read madge output from `path`.
    pub fn load(base_dir: impl AsRef<Path>, path: &Path) -> AnisotropicResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(base_dir, &json).map_err(|e| match e {
            AnisotropicError::GraphBuild { message, .. } => AnisotropicError::GraphBuild {
                entry: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Every module known to the mapping, in file order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.mapping.keys().map(PathBuf::as_path)
    }

    fn admits(&self, options: &GraphOptions, path: &Path) -> bool {
        options.accepts(path)
            && (options.include_npm || !is_under_root(&self.packages_root, path))
    }
}

impl GraphAnalyzer for MadgeJsonAnalyzer {
    fn build(
        &self,
        entry: &Path,
        options: &GraphOptions,
    ) -> AnisotropicResult<Box<dyn ModuleGraph>> {
        let entry = normalize(entry);
        if !self.mapping.contains_key(&entry) {
            return Err(AnisotropicError::GraphBuild {
                entry,
                message: "not found in dependency graph".to_string(),
            });
        }
        let base_dir = entry.parent().map(Path::to_path_buf).unwrap_or_default();

        // Breadth-first from the entry; the entry itself is always kept.
        let mut order = vec![entry.clone()];
        let mut seen: HashSet<&Path> = HashSet::from([entry.as_path()]);
        let mut queue = VecDeque::from([entry.as_path()]);
        while let Some(current) = queue.pop_front() {
            for dep in self.mapping.get(current).into_iter().flatten() {
                if self.admits(options, dep) && seen.insert(dep.as_path()) {
                    order.push(dep.clone());
                    queue.push_back(dep.as_path());
                }
            }
        }

        let key = |path: &Path| {
            pathdiff::diff_paths(path, &base_dir)
                .map(|relative| to_slash_key(&relative))
                .unwrap_or_else(|| to_slash_key(path))
        };

        let mapping = order
            .iter()
            .map(|module| {
                let deps = self
                    .mapping
                    .get(module)
                    .into_iter()
                    .flatten()
                    .filter(|dep| seen.contains(dep.as_path()))
                    .map(|dep| key(dep.as_path()))
                    .collect();
                (key(module.as_path()), deps)
            })
            .collect();

        tracing::trace!(entry = %entry.display(), "built sub-graph from madge output");

        Ok(Box::new(MadgeGraph { base_dir, mapping }))
    }
}

/// Sub-graph of one entry, keyed relative to the entry's directory.
#[derive(Debug, Clone)]
pub struct MadgeGraph {
    base_dir: PathBuf,
    mapping: IndexMap<String, Vec<String>>,
}

impl ModuleGraph for MadgeGraph {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn as_mapping(&self) -> &IndexMap<String, Vec<String>> {
        &self.mapping
    }

    fn depends_on(&self, referrer: &str, candidate: &str) -> Vec<String> {
        if referrer == candidate || !self.mapping.contains_key(referrer) {
            return Vec::new();
        }

        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut queue = VecDeque::from([referrer]);
        while let Some(current) = queue.pop_front() {
            for dep in self.mapping.get(current).into_iter().flatten() {
                let dep = dep.as_str();
                if dep == referrer || parent.contains_key(dep) {
                    continue;
                }
                parent.insert(dep, current);
                if dep == candidate {
                    let mut chain = vec![candidate.to_string()];
                    let mut step = candidate;
                    while let Some(&prev) = parent.get(step) {
                        chain.push(prev.to_string());
                        step = prev;
                    }
                    chain.reverse();
                    return chain;
                }
                queue.push_back(dep);
            }
        }

        Vec::new()
    }
}

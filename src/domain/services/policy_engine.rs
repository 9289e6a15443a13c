//! Policy engine
//!
//! Classifies every edge of a package file's dependency graph and returns
//! the violations found. The engine never aborts on a violation; deciding
//! what a violation does is the resolver's job (see `violation_report`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::PolicyConfig;
use crate::domain::entities::Violation;
use crate::domain::policies::{CyclicBoundaryPolicy, PrivilegedAccessPolicy};
use crate::domain::ports::{FileEnumerator, FilePattern, GraphAnalyzer};
use crate::domain::value_objects::{normalize, PackageName, ProjectLayout};
use crate::error::{AnisotropicError, AnisotropicResult};

use super::DependencyGraph;

pub struct PolicyEngine {
    layout: ProjectLayout,
    analyzer: Arc<dyn GraphAnalyzer>,
    enumerator: Arc<dyn FileEnumerator>,
}

impl PolicyEngine {
    pub fn new(
        layout: ProjectLayout,
        analyzer: Arc<dyn GraphAnalyzer>,
        enumerator: Arc<dyn FileEnumerator>,
    ) -> Self {
        Self {
            layout,
            analyzer,
            enumerator,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Evaluate both policies for `file`, which must lie under the packages root.
    ///
    /// Privileged-access findings come first, then cyclic-boundary findings in
    /// the analyzer's module order.
    pub fn evaluate(
        &self,
        file: &Path,
        config: &PolicyConfig,
    ) -> AnisotropicResult<Vec<Violation>> {
        let file = normalize(file);
        if !self.layout.contains(&file) {
            return Err(AnisotropicError::InvalidPath {
                path: file,
                root: self.layout.packages_root().to_path_buf(),
            });
        }

        let graph = DependencyGraph::build(self.analyzer.as_ref(), &file, &config.graph)?;
        if graph.is_empty() {
            tracing::debug!(file = %file.display(), "empty dependency graph");
            return Ok(Vec::new());
        }

        let mut violations = Vec::new();

        let found = self.privileged_targets(&file, &graph, config)?;
        if !found.is_empty() {
            let requester = self.layout.package_of(&file)?;
            let policy = PrivilegedAccessPolicy::new(&config.global_scope_filter);
            violations.extend(policy.evaluate(&file, &requester, &found));
        }

        let dependents = graph.direct_dependents();
        let policy =
            CyclicBoundaryPolicy::new(self.layout.packages_root(), &config.cyclic_dependents);
        violations.extend(policy.evaluate(&file, &dependents));

        tracing::debug!(
            file = %file.display(),
            modules = dependents.len(),
            privileged = found.len(),
            violations = violations.len(),
            "evaluated dependency graph"
        );

        Ok(violations)
    }

    /// Every privileged-package file reachable from `file`, with its owner.
    fn privileged_targets(
        &self,
        file: &Path,
        graph: &DependencyGraph,
        config: &PolicyConfig,
    ) -> AnisotropicResult<BTreeMap<PathBuf, PackageName>> {
        let mut found = BTreeMap::new();

        for (package, _) in config.global_scope_filter.iter() {
            let pattern = FilePattern::for_package(
                self.layout.package_dir(package),
                &config.graph.file_extensions,
            );
            for candidate in self.enumerator.list(&pattern)? {
                let candidate = normalize(&candidate);
                if candidate != file && graph.depends_on(file, &candidate) {
                    found.insert(candidate, package.clone());
                }
            }
        }

        Ok(found)
    }
}

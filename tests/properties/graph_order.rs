//! Property tests for order independence of the policy engine.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use proptest::prelude::*;

use anisotropic::domain::policies::{GlobalScopeFilter, PrivilegedPackage};
use anisotropic::domain::ports::{FileEnumerator, FilePattern};
use anisotropic::{
    AnisotropicResult, MadgeJsonAnalyzer, PackageName, PolicyConfig, PolicyEngine, ProjectLayout,
    Violation,
};

const ENTRY: &str = "node_modules/lib/index.js";

const POOL: &[&str] = &[
    "src/app.js",
    "src/screens/home.tsx",
    "src/util.ts",
    "node_modules/lib/util.js",
    "node_modules/keychain/index.js",
    "node_modules/keychain/store.js",
    "node_modules/@org/secrets/index.js",
    "node_modules/@org/ui/button.jsx",
];

/// Lists pool files below the requested package directory.
struct PoolEnumerator;

impl FileEnumerator for PoolEnumerator {
    fn list(&self, pattern: &FilePattern) -> AnisotropicResult<Vec<PathBuf>> {
        Ok(POOL
            .iter()
            .map(|f| Path::new("/proj").join(f))
            .filter(|p| pattern.matches(p))
            .collect())
    }
}

fn evaluate(deps: &[&str], reverse_keys: bool) -> BTreeSet<Violation> {
    let mut leaves: Vec<&str> = deps.to_vec();
    if reverse_keys {
        leaves.reverse();
    }

    let mut mapping = IndexMap::new();
    mapping.insert(
        ENTRY.to_string(),
        deps.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
    );
    for leaf in leaves {
        mapping.insert(leaf.to_string(), Vec::new());
    }

    let engine = PolicyEngine::new(
        ProjectLayout::new("/proj"),
        Arc::new(MadgeJsonAnalyzer::new("/proj", mapping)),
        Arc::new(PoolEnumerator),
    );
    let config = PolicyConfig {
        global_scope_filter: GlobalScopeFilter::new()
            .with_package(
                PackageName::new("keychain").unwrap(),
                PrivilegedPackage::default(),
            )
            .with_package(
                PackageName::new("@org/secrets").unwrap(),
                PrivilegedPackage::new([PackageName::new("lib").unwrap()]),
            ),
        ..PolicyConfig::default()
    };

    engine
        .evaluate(&Path::new("/proj").join(ENTRY), &config)
        .unwrap()
        .into_iter()
        .collect()
}

fn dependency_orders() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    proptest::sample::subsequence(POOL.to_vec(), 0..=POOL.len())
        .prop_flat_map(|deps| (Just(deps.clone()), Just(deps).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Permuting the dependency graph never changes the violation set.
    #[test]
    fn property_violations_independent_of_graph_order(
        (deps, shuffled) in dependency_orders(),
    ) {
        prop_assert_eq!(evaluate(&deps, false), evaluate(&shuffled, true));
    }

    /// PROPERTY: Every application file reached yields exactly one
    /// cyclic-boundary violation.
    #[test]
    fn property_one_cyclic_violation_per_app_file(
        deps in proptest::sample::subsequence(POOL.to_vec(), 0..=POOL.len()),
    ) {
        let cyclic = evaluate(&deps, false)
            .into_iter()
            .filter(|v| matches!(v, Violation::CyclicBoundary { .. }))
            .count();
        prop_assert_eq!(cyclic, deps.iter().filter(|d| d.starts_with("src/")).count());
    }
}

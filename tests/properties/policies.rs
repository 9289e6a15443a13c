//! Property tests for the boundary policies.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use regex::Regex;

use anisotropic::domain::policies::{
    CyclicBoundaryPolicy, GlobalScopeFilter, PrivilegedAccessPolicy, PrivilegedPackage,
    MATCH_NOTHING,
};
use anisotropic::domain::value_objects::PackageName;

const PACKAGES_ROOT: &str = "/proj/node_modules";

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,8}").unwrap()
}

fn package() -> impl Strategy<Value = PackageName> {
    prop_oneof![
        segment(),
        (segment(), segment()).prop_map(|(scope, name)| format!("@{}/{}", scope, name)),
    ]
    .prop_map(|name| PackageName::new(name).unwrap())
}

fn package_file() -> impl Strategy<Value = PathBuf> {
    (package(), proptest::collection::vec(segment(), 0..3)).prop_map(|(package, dirs)| {
        let mut path = PathBuf::from(PACKAGES_ROOT).join(package.as_str());
        path.extend(dirs);
        path.join("index.js")
    })
}

fn any_file() -> impl Strategy<Value = PathBuf> {
    prop_oneof![
        package_file(),
        proptest::collection::vec(segment(), 1..4)
            .prop_map(|dirs| PathBuf::from("/proj/src").join(dirs.join("/")).join("app.js")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A file whose whole graph stays inside the packages root has
    /// no cyclic-boundary violations.
    #[test]
    fn property_graph_inside_root_is_clean(
        file in package_file(),
        dependents in proptest::collection::vec(package_file(), 0..16),
    ) {
        let nothing = Regex::new(MATCH_NOTHING).unwrap();
        let policy = CyclicBoundaryPolicy::new(Path::new(PACKAGES_ROOT), &nothing);
        prop_assert!(policy.evaluate(&file, &dependents).is_empty());
    }

    /// PROPERTY: An exempt file never has cyclic-boundary violations.
    #[test]
    fn property_exempt_file_is_clean(
        file in package_file(),
        dependents in proptest::collection::vec(any_file(), 0..16),
    ) {
        let exempt = Regex::new(&format!("^{}$", regex::escape(&file.to_string_lossy()))).unwrap();
        let policy = CyclicBoundaryPolicy::new(Path::new(PACKAGES_ROOT), &exempt);
        prop_assert!(policy.evaluate(&file, &dependents).is_empty());
    }

    /// PROPERTY: Exception packages are never reported; every other
    /// requester gets exactly one violation covering all targets.
    #[test]
    fn property_exceptions_partition_requesters(
        owner in package(),
        exceptions in proptest::collection::btree_set(package(), 0..4),
        requester in package(),
        targets in proptest::collection::btree_set(segment(), 1..6),
    ) {
        prop_assume!(owner != requester);

        let filter = GlobalScopeFilter::new()
            .with_package(owner.clone(), PrivilegedPackage::new(exceptions.clone()));
        let found: BTreeMap<PathBuf, PackageName> = targets
            .iter()
            .map(|t| {
                let path = PathBuf::from(PACKAGES_ROOT)
                    .join(owner.as_str())
                    .join(format!("{}.js", t));
                (path, owner.clone())
            })
            .collect();
        let file = PathBuf::from(PACKAGES_ROOT).join(requester.as_str()).join("index.js");

        let violation = PrivilegedAccessPolicy::new(&filter).evaluate(&file, &requester, &found);

        if exceptions.contains(&requester) {
            prop_assert!(violation.is_none());
        } else {
            let violation = violation.unwrap();
            prop_assert_eq!(violation.targets().len(), targets.len());
        }
    }
}

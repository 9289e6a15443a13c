//! Property tests for path and package classification.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use anisotropic::domain::value_objects::{is_under_root, normalize, package_of, PackageName};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9._-]{0,12}").unwrap()
}

fn package_name() -> impl Strategy<Value = String> {
    prop_oneof![
        segment(),
        (segment(), segment()).prop_map(|(scope, name)| format!("@{}/{}", scope, name)),
    ]
}

fn relative_suffix() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 0..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Package classification never panics on arbitrary input.
    #[test]
    fn property_package_of_never_panics(
        s in "(?s).{0,128}"
    ) {
        let _ = package_of(Path::new("/proj/node_modules"), Path::new(&s));
        let _ = normalize(Path::new(&s));
    }

    /// PROPERTY: Any file below a package directory belongs to that package,
    /// scoped names included.
    #[test]
    fn property_package_of_recovers_name(
        name in package_name(),
        suffix in relative_suffix(),
    ) {
        let path = PathBuf::from("/proj/node_modules")
            .join(&name)
            .join(&suffix)
            .join("index.js");
        let package = package_of(Path::new("/proj/node_modules"), &path).unwrap();
        prop_assert_eq!(package, PackageName::new(name).unwrap());
    }

    /// PROPERTY: A path is never under itself, and `..` cannot escape a root
    /// while still counting as inside it.
    #[test]
    fn property_is_under_root_is_strict(
        root in relative_suffix(),
        escape in 1usize..4,
    ) {
        let root = PathBuf::from("/").join(&root);
        prop_assert!(!is_under_root(&root, &root));

        let mut outside = root.clone();
        for _ in 0..escape {
            outside.push("..");
        }
        outside.push("elsewhere.js");
        let escaped = normalize(&outside);
        prop_assert_eq!(is_under_root(&root, &outside), escaped.starts_with(&root) && escaped != root);
    }
}

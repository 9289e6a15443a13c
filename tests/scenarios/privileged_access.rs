//! Scenario: privileged package with an exception list
//!
//! `keychain` is privileged and only `auth` may depend on it.

use std::collections::BTreeSet;

use anisotropic::{TransformRequest, Violation};
use serde_json::json;

use crate::common::*;

fn keychain_options() -> serde_json::Value {
    plugin_options(json!({
        "globalScopeFilter": { "keychain": { "exceptions": ["auth"] } }
    }))
}

#[test]
fn scenario_non_exempt_package_is_reported_once() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/ui/index.js"),
            keychain_options(),
        ))
        .unwrap();

    let violations = resolver.take();
    assert_eq!(violations.len(), 1, "targets are batched per referrer");

    match &violations[0] {
        Violation::PrivilegedAccess {
            referrer,
            packages,
            disallowed,
        } => {
            assert_eq!(referrer, &project.path("node_modules/ui/index.js"));
            assert_eq!(
                packages.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
                vec!["keychain"]
            );
            // `button.js` reaches `keychain/index.js`, which reaches `store.js`.
            let expected: BTreeSet<_> = [
                project.path("node_modules/keychain/index.js"),
                project.path("node_modules/keychain/store.js"),
            ]
            .into_iter()
            .collect();
            assert_eq!(disallowed, &expected);
        }
        other => panic!("expected privileged access, got {:?}", other),
    }
}

#[test]
fn scenario_exception_package_is_allowed() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/auth/index.js"),
            keychain_options(),
        ))
        .unwrap();

    assert!(resolver.is_empty());
}

#[test]
fn scenario_privileged_package_may_use_its_own_files() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/keychain/index.js"),
            plugin_options(json!({ "globalScopeFilter": { "keychain": {} } })),
        ))
        .unwrap();

    assert!(resolver.is_empty());
}

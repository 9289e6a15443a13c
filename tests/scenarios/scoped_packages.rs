//! Scenario: scoped privileged package
//!
//! `@org/secrets` is privileged. `@org/other` shares its scope but is a
//! different package.

use anisotropic::{AnisotropicError, TransformRequest, Violation};
use serde_json::json;

use crate::common::*;

#[test]
fn scenario_shared_scope_grants_no_exception() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/@org/other/index.js"),
            plugin_options(json!({ "globalScopeFilter": { "@org/secrets": {} } })),
        ))
        .unwrap();

    let violations = resolver.take();
    assert_eq!(violations.len(), 1);
    assert!(matches!(
        &violations[0],
        Violation::PrivilegedAccess { packages, .. }
            if packages.iter().any(|p| p.as_str() == "@org/secrets")
    ));
}

#[test]
fn scenario_scoped_exception_is_honored() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/@org/other/index.js"),
            plugin_options(json!({
                "globalScopeFilter": { "@org/secrets": { "exceptions": ["@org/other"] } }
            })),
        ))
        .unwrap();

    assert!(resolver.is_empty());
}

#[test]
fn scenario_bare_scope_is_a_config_error() {
    let project = TestProject::with_fixture_graph();
    let (transformer, _) = project.collecting_transformer();

    let err = transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/@org/other/index.js"),
            plugin_options(json!({ "globalScopeFilter": { "@org": {} } })),
        ))
        .unwrap_err();

    assert!(matches!(err, AnisotropicError::Config(_)));
}

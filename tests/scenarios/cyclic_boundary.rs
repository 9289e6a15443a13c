//! Scenario: a package reaches back into the application
//!
//! `node_modules/lib/index.js` imports `src/app.js`, which lies outside the
//! packages root.

use anisotropic::{TransformRequest, Violation};
use serde_json::json;

use crate::common::*;

#[test]
fn scenario_package_importing_app_code_is_reported() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "require('../../src/app');",
            project.path("node_modules/lib/index.js"),
            json!({}),
        ))
        .unwrap();

    assert_eq!(
        resolver.take(),
        vec![Violation::CyclicBoundary {
            referrer: project.path("node_modules/lib/index.js"),
            target: project.path("src/app.js"),
        }]
    );
}

#[test]
fn scenario_default_resolver_aborts_the_transform() {
    let project = TestProject::with_fixture_graph();
    let transformer = anisotropic::Transformer::new(
        project.engine(),
        anisotropic::PassthroughTransformer,
    );

    let err = transformer
        .transform(TransformRequest::new(
            "",
            "node_modules/lib/index.js",
            json!({}),
        ))
        .unwrap_err();

    // Relative filenames resolve against the application root, and the
    // message names both ends of the edge.
    let message = err.to_string();
    assert!(message.starts_with("cyclic dependency detected"));
    assert!(message.contains("node_modules/lib/index.js"));
    assert!(message.contains("src/app.js"));
}

#[test]
fn scenario_exempt_entry_point_may_import_app_code() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    transformer
        .transform(TransformRequest::new(
            "",
            project.path("node_modules/lib/index.js"),
            plugin_options(json!({ "cyclicDependents": r"/node_modules/lib/index\.js$" })),
        ))
        .unwrap();

    assert!(resolver.is_empty());
}

//! Scenario: files without dependencies pass through untouched

use anisotropic::TransformRequest;
use serde_json::json;

use crate::common::*;

const SOURCE: &str = "export const answer = 42;\n";

#[test]
fn scenario_leaf_package_round_trips_under_any_config() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    let configs = [
        json!({}),
        plugin_options(json!({ "resolve": "warn" })),
        plugin_options(json!({
            "cyclicDependents": ".*",
            "globalScopeFilter": { "keychain": {}, "@org/secrets": {} }
        })),
        plugin_options(json!({ "madge": { "includeNpm": false } })),
    ];

    for options in configs {
        let out = transformer
            .transform(TransformRequest::new(
                SOURCE,
                project.path("node_modules/leaf/index.js"),
                options,
            ))
            .unwrap();
        assert_eq!(out.code, SOURCE);
        assert_eq!(out.filename, project.path("node_modules/leaf/index.js"));
    }

    assert!(resolver.is_empty());
}

#[test]
fn scenario_application_code_is_never_evaluated() {
    let project = TestProject::with_fixture_graph();
    let (transformer, resolver) = project.collecting_transformer();

    // Files outside the packages root need not appear in the graph.
    let out = transformer
        .transform_host_call(json!([SOURCE, project.path("src/unlisted.js"), {}]))
        .unwrap();

    assert_eq!(out.code, SOURCE);
    assert!(resolver.is_empty());
}

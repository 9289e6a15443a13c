//! Configuration type definitions

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::policies::{GlobalScopeFilter, MATCH_NOTHING};
use crate::domain::ports::{DetectiveOptions, GraphOptions, DEFAULT_EXTENSIONS};

/// Key of this plugin inside the host's `customTransformOptions`.
pub const PLUGIN_NAME: &str = "metro-plugin-anisotropic-transform";

/// What the default resolver does with a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Fail the transform
    #[default]
    Abort,
    /// Log and continue
    Warn,
}

/// Graph construction settings (`madge` key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_npm: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extensions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detective_options: Option<DetectiveOptions>,
}

/// One entry of `globalScopeFilter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegedPackageSettings {
    #[serde(default)]
    pub exceptions: Vec<String>,
}

/// Policy settings as written by users.
///
/// Every field is optional so that partial overrides can be merged onto
/// the defaults. See `resolve_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub madge: Option<GraphSettings>,

    /// Regex over absolute paths of package files allowed to reach into
    /// application code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cyclic_dependents: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_scope_filter: Option<IndexMap<String, PrivilegedPackageSettings>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<ResolveMode>,
}

impl PolicySettings {
    /// Engine defaults: follow installed packages, the four bundler source
    /// extensions, no cyclic-boundary exemptions, no privileged packages,
    /// abort on violation.
    pub fn defaults() -> Self {
        Self {
            madge: Some(GraphSettings {
                include_npm: Some(true),
                file_extensions: Some(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()),
                detective_options: Some(DetectiveOptions::default()),
            }),
            cyclic_dependents: Some(MATCH_NOTHING.to_string()),
            global_scope_filter: Some(IndexMap::new()),
            resolve: Some(ResolveMode::Abort),
        }
    }
}

/// Resolved, immutable policy configuration for one transform call.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    pub graph: GraphOptions,
    pub cyclic_dependents: Regex,
    pub global_scope_filter: GlobalScopeFilter,
    pub resolve: ResolveMode,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            graph: GraphOptions::default(),
            cyclic_dependents: Regex::new(MATCH_NOTHING).expect("constant pattern should compile"),
            global_scope_filter: GlobalScopeFilter::default(),
            resolve: ResolveMode::default(),
        }
    }
}

//! Configuration merging
//!
//! `resolve_config` merges caller overrides onto the defaults and validates
//! the result. Scalars and patterns in the overrides replace the defaults;
//! `madge` merges field by field; `globalScopeFilter` merges package by
//! package, an overriding entry replacing the default entry whole.

use serde_json::Value;

use crate::domain::policies::{GlobalScopeFilter, PrivilegedPackage};
use crate::domain::ports::GraphOptions;
use crate::domain::value_objects::PackageName;
use crate::error::{AnisotropicError, AnisotropicResult};

use super::types::{GraphSettings, PolicyConfig, PolicySettings, PLUGIN_NAME};

/// Merge `overrides` onto `defaults`.
pub fn merge_settings(defaults: PolicySettings, overrides: PolicySettings) -> PolicySettings {
    let global_scope_filter = match (defaults.global_scope_filter, overrides.global_scope_filter) {
        (Some(mut base), Some(over)) => {
            base.extend(over);
            Some(base)
        }
        (base, over) => over.or(base),
    };

    PolicySettings {
        madge: merge_graph(defaults.madge, overrides.madge),
        cyclic_dependents: overrides.cyclic_dependents.or(defaults.cyclic_dependents),
        global_scope_filter,
        resolve: overrides.resolve.or(defaults.resolve),
    }
}

fn merge_graph(base: Option<GraphSettings>, over: Option<GraphSettings>) -> Option<GraphSettings> {
    match (base, over) {
        (Some(base), Some(over)) => Some(GraphSettings {
            include_npm: over.include_npm.or(base.include_npm),
            file_extensions: over.file_extensions.or(base.file_extensions),
            detective_options: over.detective_options.or(base.detective_options),
        }),
        (base, over) => over.or(base),
    }
}

/// Merge and validate into an immutable `PolicyConfig`.
pub fn resolve_config(
    defaults: PolicySettings,
    overrides: PolicySettings,
) -> AnisotropicResult<PolicyConfig> {
    PolicyConfig::try_from(merge_settings(defaults, overrides))
}

/// Extract this plugin's settings from host transform options.
///
/// Missing or `null` settings mean "no overrides".
pub fn settings_from_options(options: &Value) -> AnisotropicResult<PolicySettings> {
    let subtree = options
        .get("customTransformOptions")
        .and_then(|custom| custom.get(PLUGIN_NAME));

    match subtree {
        None | Some(Value::Null) => Ok(PolicySettings::default()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            AnisotropicError::config(format!(
                "customTransformOptions[\"{}\"]: {}",
                PLUGIN_NAME, e
            ))
        }),
    }
}

impl TryFrom<PolicySettings> for PolicyConfig {
    type Error = AnisotropicError;

    fn try_from(settings: PolicySettings) -> Result<Self, Self::Error> {
        let madge = settings
            .madge
            .ok_or_else(|| AnisotropicError::config("missing `madge` graph options"))?;
        let graph = GraphOptions {
            include_npm: madge
                .include_npm
                .ok_or_else(|| AnisotropicError::config("missing `madge.includeNpm`"))?,
            file_extensions: madge
                .file_extensions
                .ok_or_else(|| AnisotropicError::config("missing `madge.fileExtensions`"))?,
            detective_options: madge.detective_options.unwrap_or_default(),
        };
        if graph.file_extensions.is_empty() {
            return Err(AnisotropicError::config(
                "`madge.fileExtensions` must list at least one extension",
            ));
        }

        let pattern = settings
            .cyclic_dependents
            .ok_or_else(|| AnisotropicError::config("missing `cyclicDependents` pattern"))?;
        let cyclic_dependents = regex::Regex::new(&pattern).map_err(|e| {
            AnisotropicError::config(format!("`cyclicDependents` is not a valid pattern: {}", e))
        })?;

        let global_scope_filter = settings
            .global_scope_filter
            .unwrap_or_default()
            .into_iter()
            .map(|(name, entry)| {
                let name = parse_package(&name, "globalScopeFilter")?;
                let exceptions = entry
                    .exceptions
                    .iter()
                    .map(|e| parse_package(e, &format!("globalScopeFilter.{}.exceptions", name)))
                    .collect::<AnisotropicResult<Vec<_>>>()?;
                Ok((name, PrivilegedPackage::new(exceptions)))
            })
            .collect::<AnisotropicResult<GlobalScopeFilter>>()?;

        Ok(PolicyConfig {
            graph,
            cyclic_dependents,
            global_scope_filter,
            resolve: settings.resolve.unwrap_or_default(),
        })
    }
}

fn parse_package(name: &str, key: &str) -> AnisotropicResult<PackageName> {
    PackageName::new(name).map_err(|e| AnisotropicError::config(format!("`{}`: {}", key, e)))
}

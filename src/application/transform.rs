//! Transform Orchestrator
//!
//! Entry point called by the host pipeline once per file:
//! 1. Normalize the call (positional or record form)
//! 2. Resolve the policy configuration from the call's options
//! 3. Evaluate and report policies, for package files only
//! 4. Hand the untouched request to the upstream transformer

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{merge_settings, resolve_config, settings_from_options};
use crate::config::{PolicyConfig, PolicySettings, ResolveMode};
use crate::domain::ports::{
    AbortResolver, TransformRequest, UpstreamTransformer, ViolationResolver, WarnResolver,
};
use crate::domain::services::{report_all, PolicyEngine};
use crate::error::{AnisotropicError, AnisotropicResult};

/// A transform call as the host pipeline sends it.
///
/// Older pipelines pass `(src, filename, options)`; newer ones pass a single
/// `{ src, filename, options }` record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HostCall {
    Positional(String, PathBuf, Value),
    Record(TransformRequest),
}

impl From<HostCall> for TransformRequest {
    fn from(call: HostCall) -> Self {
        match call {
            HostCall::Positional(src, filename, options) => {
                TransformRequest::new(src, filename, options)
            }
            HostCall::Record(request) => request,
        }
    }
}

/// Policy-enforcing wrapper around an upstream transformer.
///
/// Holds no per-call state; one instance can serve concurrent calls.
pub struct Transformer<U>
where
    U: UpstreamTransformer,
{
    engine: PolicyEngine,
    upstream: U,
    defaults: PolicySettings,
    resolver: Option<Arc<dyn ViolationResolver>>,
}

impl<U> Transformer<U>
where
    U: UpstreamTransformer,
{
    pub fn new(engine: PolicyEngine, upstream: U) -> Self {
        Self {
            engine,
            upstream,
            defaults: PolicySettings::defaults(),
            resolver: None,
        }
    }

    /// Project-level settings, applied between the built-in defaults and
    /// the per-call options.
    pub fn with_defaults(mut self, settings: PolicySettings) -> Self {
        self.defaults = merge_settings(PolicySettings::defaults(), settings);
        self
    }

    /// Route violations to `resolver` instead of the one named by `resolve`.
    pub fn with_resolver(mut self, resolver: Arc<dyn ViolationResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// Run the policies for one file, then delegate to the upstream transformer.
    ///
    /// The upstream result is returned as is. Files outside the packages
    /// root skip evaluation entirely.
    pub fn transform(
        &self,
        request: impl Into<TransformRequest>,
    ) -> AnisotropicResult<U::Output> {
        let request = request.into();
        let config = self.config_for(&request.options)?;

        let file = self.engine.layout().resolve_file(&request.filename);
        if self.engine.layout().contains(&file) {
            let violations = self.engine.evaluate(&file, &config)?;
            let resolver = self.resolver_for(&config);
            report_all(&violations, resolver.as_ref())?;
        } else {
            tracing::trace!(file = %file.display(), "outside packages root, skipped");
        }

        self.upstream
            .transform(request)
            .map_err(AnisotropicError::Upstream)
    }

    /// Accept a raw JSON call in either host form.
    pub fn transform_host_call(&self, call: Value) -> AnisotropicResult<U::Output> {
        let call: HostCall = serde_json::from_value(call)
            .map_err(|e| AnisotropicError::config(format!("unrecognized transform call: {}", e)))?;
        self.transform(call)
    }

    fn config_for(&self, options: &Value) -> AnisotropicResult<PolicyConfig> {
        let overrides = settings_from_options(options)?;
        resolve_config(self.defaults.clone(), overrides)
    }

    fn resolver_for(&self, config: &PolicyConfig) -> Arc<dyn ViolationResolver> {
        match (&self.resolver, config.resolve) {
            (Some(resolver), _) => Arc::clone(resolver),
            (None, ResolveMode::Abort) => Arc::new(AbortResolver),
            (None, ResolveMode::Warn) => Arc::new(WarnResolver),
        }
    }
}

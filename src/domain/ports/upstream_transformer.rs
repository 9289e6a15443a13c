//! Upstream Transformer Port
//!
//! The transformer that actually rewrites syntax. It receives the host's
//! request untouched and its result is handed back untouched.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One transform call from the host pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub src: String,
    pub filename: PathBuf,
    #[serde(default)]
    pub options: serde_json::Value,
}

impl TransformRequest {
    pub fn new(
        src: impl Into<String>,
        filename: impl Into<PathBuf>,
        options: serde_json::Value,
    ) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
            options,
        }
    }
}

impl From<(String, PathBuf, serde_json::Value)> for TransformRequest {
    fn from((src, filename, options): (String, PathBuf, serde_json::Value)) -> Self {
        Self {
            src,
            filename,
            options,
        }
    }
}

/// The downstream transformer.
///
/// Its output type is opaque to the policy engine.
pub trait UpstreamTransformer: Send + Sync {
    type Output;

    fn transform(&self, request: TransformRequest) -> anyhow::Result<Self::Output>;
}

/// Output of `PassthroughTransformer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOutput {
    pub code: String,
    pub filename: PathBuf,
}

/// Transformer that returns the source unchanged.
///
/// Used when only the policy check matters.
pub struct PassthroughTransformer;

impl UpstreamTransformer for PassthroughTransformer {
    type Output = TransformOutput;

    fn transform(&self, request: TransformRequest) -> anyhow::Result<Self::Output> {
        Ok(TransformOutput {
            code: request.src,
            filename: request.filename,
        })
    }
}

//! Error types for the anisotropic transform
//!
//! Uses `thiserror` for library errors. Every failure a transform invocation
//! can hit is one of these variants; none of them are retried.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::Violation;

/// Result type alias for anisotropic operations
pub type AnisotropicResult<T> = Result<T, AnisotropicError>;

/// Main error type for anisotropic operations
#[derive(Error, Debug)]
pub enum AnisotropicError {
    /// A path used for package classification is not under the expected root
    #[error("path '{path}' is not inside '{root}'")]
    InvalidPath { path: PathBuf, root: PathBuf },

    /// The dependency graph analyzer could not process the entry file
    #[error("failed to build dependency graph for {entry}: {message}")]
    GraphBuild { entry: PathBuf, message: String },

    /// Policy configuration has the wrong shape
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A dependency edge broke a configured boundary
    #[error("{0}")]
    PolicyViolation(Violation),

    /// Files of a privileged package could not be listed
    #[error("failed to enumerate '{pattern}': {message}")]
    Enumeration { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The downstream transformer failed
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl AnisotropicError {
    /// Build a configuration error from anything printable.
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Returns the violation carried by this error, if it is one.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::PolicyViolation(violation) => Some(violation),
            _ => None,
        }
    }
}

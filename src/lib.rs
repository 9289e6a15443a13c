//! Anisotropic - dependency boundary enforcement for bundler transforms
//!
//! Runs before the real source transformer of a bundler pipeline and rejects
//! dependency edges that cross configured boundaries:
//!
//! - installed packages importing application code (cyclic boundary)
//! - packages reaching into a privileged package without an exception
//!
//! Everything else is delegated untouched to the upstream transformer.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckReport, CheckUseCase, HostCall, Transformer};
pub use config::{resolve_config, PolicyConfig, PolicySettings, ResolveMode, PLUGIN_NAME};
pub use domain::entities::{Violation, ViolationKind};
pub use domain::ports::{
    AbortResolver, FileEnumerator, GraphAnalyzer, ModuleGraph, PassthroughTransformer,
    TransformRequest, UpstreamTransformer, ViolationResolver, WarnResolver,
};
pub use domain::services::PolicyEngine;
pub use domain::value_objects::{PackageName, ProjectLayout};
pub use error::{AnisotropicError, AnisotropicResult};
pub use infrastructure::{CollectingResolver, GlobFileEnumerator, MadgeJsonAnalyzer};

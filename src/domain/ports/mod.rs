//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_enumerator;
pub mod graph_analyzer;
pub mod upstream_transformer;
pub mod violation_resolver;

pub use file_enumerator::{FileEnumerator, FilePattern};
pub use graph_analyzer::{
    DetectiveOptions, Es6Options, GraphAnalyzer, GraphOptions, ModuleGraph, DEFAULT_EXTENSIONS,
};
pub use upstream_transformer::{
    PassthroughTransformer, TransformOutput, TransformRequest, UpstreamTransformer,
};
pub use violation_resolver::{AbortResolver, ViolationResolver, WarnResolver};

//! Domain Layer
//!
//! The policy core - path/package classification, the dependency graph
//! adapter and the two boundary policies. Nothing here touches the file
//! system directly.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (PackageName, ProjectLayout)
//! - `entities/` - Violations reported by the engine
//! - `ports/` - Interfaces for the graph analyzer, file enumerator,
//!   violation resolver and downstream transformer
//! - `policies/` - Cyclic-boundary and privileged-access rules
//! - `services/` - DependencyGraph adapter and PolicyEngine
//!
//! ## Design Principles
//!
//! 1. **No I/O** - All collaborators are reached through trait-defined ports
//! 2. **Detection is separate from reaction** - the engine returns violations,
//!    the resolver decides whether to abort

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

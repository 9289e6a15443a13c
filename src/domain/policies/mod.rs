//! Domain Policies
//!
//! Boundary rules evaluated against a file's dependency graph.
//! These are pure functions over paths and package names.

mod cyclic_boundary;
mod privileged_access;

pub use cyclic_boundary::{CyclicBoundaryPolicy, MATCH_NOTHING};
pub use privileged_access::{GlobalScopeFilter, PrivilegedAccessPolicy, PrivilegedPackage};

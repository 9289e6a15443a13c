//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `madge` - Graph analyzer reading madge's JSON output
//! - `fs/` - File enumeration
//! - `resolvers` - Stateful violation resolvers

pub mod fs;
pub mod madge;
pub mod resolvers;

// Re-export for convenience
pub use fs::GlobFileEnumerator;
pub use madge::{MadgeGraph, MadgeJsonAnalyzer};
pub use resolvers::CollectingResolver;

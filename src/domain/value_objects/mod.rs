//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod package_name;
mod path;
mod project_layout;

pub use package_name::{PackageName, PackageNameError, SCOPE_MARKER};
pub use path::{is_under_root, join_normalized, normalize, package_of, to_slash_key};
pub use project_layout::{ProjectLayout, PACKAGES_DIR};

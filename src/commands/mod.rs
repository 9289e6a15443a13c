//! Command handlers for the `anisotropic` binary

mod check;
mod package_of;
mod project_root;

pub use check::cmd_check;
pub use package_of::cmd_package_of;

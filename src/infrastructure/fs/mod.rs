//! File System Implementations
//!
//! Concrete implementations of the FileEnumerator port.

mod package_files;

pub use package_files::GlobFileEnumerator;

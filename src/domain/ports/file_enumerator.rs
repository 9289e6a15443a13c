//! File Enumerator Port
//!
//! Lists the files that belong to a package so the engine can ask the
//! dependency graph about each of them.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::AnisotropicResult;

/// A glob rooted at a directory: `<base>/**/*.{ext,...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    base: PathBuf,
    extensions: Vec<String>,
}

impl FilePattern {
    /// Every source file below `dir` with one of `extensions`.
    pub fn for_package(dir: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            base: dir.into(),
            extensions: extensions.to_vec(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// One glob per extension, relative to `base`.
    pub fn globs(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!("**/*.{}", ext))
            .collect()
    }

    /// Returns true when `path` falls under this pattern.
    pub fn matches(&self, path: &Path) -> bool {
        path.starts_with(&self.base)
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| self.extensions.iter().any(|x| x == e))
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/**/*.{{{}}}",
            self.base.display(),
            self.extensions.join(",")
        )
    }
}

/// Lists files matching a pattern.
///
/// Implementations:
/// - `GlobFileEnumerator` - walks the file system
pub trait FileEnumerator: Send + Sync {
    /// All files matching `pattern`. A missing base directory yields no files.
    fn list(&self, pattern: &FilePattern) -> AnisotropicResult<Vec<PathBuf>>;
}

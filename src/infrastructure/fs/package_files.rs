//! Package file enumeration
//!
//! Walks a package directory with the `ignore` crate. Standard filters are
//! off: installed packages usually sit in a gitignored directory and must
//! still be listed.

use std::path::PathBuf;

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::domain::ports::{FileEnumerator, FilePattern};
use crate::error::{AnisotropicError, AnisotropicResult};

/// Local file enumerator backed by glob overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobFileEnumerator;

impl GlobFileEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnumerator for GlobFileEnumerator {
    fn list(&self, pattern: &FilePattern) -> AnisotropicResult<Vec<PathBuf>> {
        let base = pattern.base();
        if !base.is_dir() {
            tracing::debug!(pattern = %pattern, "package directory missing");
            return Ok(Vec::new());
        }

        let fail = |e: ignore::Error| AnisotropicError::Enumeration {
            pattern: pattern.to_string(),
            message: e.to_string(),
        };

        let mut overrides = OverrideBuilder::new(base);
        for glob in pattern.globs() {
            overrides.add(&glob).map_err(fail)?;
        }
        let overrides = overrides.build().map_err(fail)?;

        let mut builder = WalkBuilder::new(base);
        builder.standard_filters(false).overrides(overrides);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(fail)?;
            if entry.file_type().is_some_and(|t| t.is_file()) {
                files.push(entry.into_path());
            }
        }
        files.sort();

        Ok(files)
    }
}

//! Cyclic Boundary Policy
//!
//! Installed packages must not reach back into the application that
//! consumes them. Any module of a package file's graph that lies outside
//! the packages root is a violation, unless the package file itself matches
//! the exemption pattern.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::domain::entities::Violation;
use crate::domain::value_objects::is_under_root;

/// Pattern that matches no path at all.
pub const MATCH_NOTHING: &str = "a^";

#[derive(Debug, Clone, Copy)]
pub struct CyclicBoundaryPolicy<'a> {
    packages_root: &'a Path,
    exempt: &'a Regex,
}

impl<'a> CyclicBoundaryPolicy<'a> {
    pub fn new(packages_root: &'a Path, exempt: &'a Regex) -> Self {
        Self {
            packages_root,
            exempt,
        }
    }

    /// Returns true when `file` may depend on application code.
    pub fn is_exempt(&self, file: &Path) -> bool {
        self.exempt.is_match(&file.to_string_lossy())
    }

    /// One violation per dependent outside the packages root.
    pub fn evaluate(&self, file: &Path, dependents: &[PathBuf]) -> Vec<Violation> {
        if self.is_exempt(file) {
            return Vec::new();
        }

        dependents
            .iter()
            .filter(|target| !is_under_root(self.packages_root, target))
            .map(|target| Violation::CyclicBoundary {
                referrer: file.to_path_buf(),
                target: target.clone(),
            })
            .collect()
    }
}

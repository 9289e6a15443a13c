//! Project layout value object
//!
//! Where the application lives and where its installed packages live.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::AnisotropicResult;

use super::{is_under_root, join_normalized, normalize, package_of, PackageName};

/// Directory under the project root holding installed packages.
pub const PACKAGES_DIR: &str = "node_modules";

/// The application root and its packages root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    packages_root: PathBuf,
}

impl ProjectLayout {
    /// Layout with the packages root at `<root>/node_modules`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = normalize(root.as_ref());
        let packages_root = root.join(PACKAGES_DIR);
        Self {
            root,
            packages_root,
        }
    }

    /// Override the packages root.
    pub fn with_packages_root(mut self, packages_root: impl AsRef<Path>) -> Self {
        self.packages_root = join_normalized(&self.root, packages_root.as_ref());
        self
    }

    /// Locate the application root from a working directory.
    ///
    /// When `cwd` sits inside an installed package, the application root is
    /// everything before the first `node_modules` segment.
    pub fn discover(cwd: impl AsRef<Path>) -> Self {
        let cwd = normalize(cwd.as_ref());
        let mut root = PathBuf::new();
        for component in cwd.components() {
            if component == Component::Normal(OsStr::new(PACKAGES_DIR)) {
                return Self::new(root);
            }
            root.push(component.as_os_str());
        }
        Self::new(cwd)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn packages_root(&self) -> &Path {
        &self.packages_root
    }

    /// Absolute location of a filename handed over by the host pipeline.
    ///
    /// Relative names are taken relative to the application root.
    pub fn resolve_file(&self, filename: &Path) -> PathBuf {
        if filename.is_absolute() {
            normalize(filename)
        } else {
            join_normalized(&self.root, filename)
        }
    }

    /// Returns true when `file` is third-party code (inside the packages root).
    pub fn contains(&self, file: &Path) -> bool {
        is_under_root(&self.packages_root, file)
    }

    /// Package owning `file`.
    pub fn package_of(&self, file: &Path) -> AnisotropicResult<PackageName> {
        package_of(&self.packages_root, file)
    }

    /// Install directory of `package`.
    pub fn package_dir(&self, package: &PackageName) -> PathBuf {
        package
            .as_str()
            .split('/')
            .fold(self.packages_root.clone(), |dir, segment| dir.join(segment))
    }
}

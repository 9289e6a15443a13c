//! Package name value object
//!
//! A package is identified by the first path segment below the packages
//! root, or by the first two segments for scoped packages (`@scope/name`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Leading character of a scoped package's first segment.
pub const SCOPE_MARKER: char = '@';

/// Error when a package name is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageNameError {
    /// Name is empty
    Empty,
    /// Scoped name is not exactly `@scope/name`
    MalformedScope(String),
    /// Unscoped name contains a separator
    UnexpectedSeparator(String),
}

impl fmt::Display for PackageNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageNameError::Empty => write!(f, "Package name is empty"),
            PackageNameError::MalformedScope(name) => {
                write!(f, "Scoped package '{}' must look like '@scope/name'", name)
            }
            PackageNameError::UnexpectedSeparator(name) => {
                write!(f, "Package '{}' contains '/' but is not scoped", name)
            }
        }
    }
}

impl std::error::Error for PackageNameError {}

/// A validated package name.
///
/// Scoped packages are kept as a unit: `@org/a` and `@org/b` are distinct
/// packages and never compare equal on their scope alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Validate and wrap a package name.
    pub fn new(name: impl Into<String>) -> Result<Self, PackageNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PackageNameError::Empty);
        }

        if name.starts_with(SCOPE_MARKER) {
            let mut parts = name.split('/');
            let scope = parts.next().unwrap_or_default();
            let rest = parts.next();
            let valid = scope.len() > 1
                && rest.is_some_and(|r| !r.is_empty())
                && parts.next().is_none();
            if !valid {
                return Err(PackageNameError::MalformedScope(name));
            }
        } else if name.contains('/') {
            return Err(PackageNameError::UnexpectedSeparator(name));
        }

        Ok(Self(name))
    }

    /// Build a name from the leading path segments below the packages root.
    ///
    /// Returns `None` when the segments cannot form a package (nothing
    /// below the root, or a bare scope directory).
    pub fn from_segments<'a, I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut segments = segments.into_iter();
        let first = segments.next()?;
        if first.starts_with(SCOPE_MARKER) {
            let second = segments.next()?;
            Self::new(format!("{}/{}", first, second)).ok()
        } else {
            Self::new(first).ok()
        }
    }

    /// The full name, including the scope for scoped packages.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for `@scope/name` packages.
    pub fn is_scoped(&self) -> bool {
        self.0.starts_with(SCOPE_MARKER)
    }

    /// The `@scope` part of a scoped package.
    pub fn scope(&self) -> Option<&str> {
        if self.is_scoped() {
            self.0.split('/').next()
        } else {
            None
        }
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = PackageNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageName {
    type Error = PackageNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

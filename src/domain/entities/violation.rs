//! Violation entity
//!
//! Violations are produced by the policy engine and consumed immediately by
//! a `ViolationResolver`. They carry enough context to locate the offending
//! import without re-running the analysis.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::PackageName;

/// Which policy a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    CyclicBoundary,
    PrivilegedAccess,
}

impl ViolationKind {
    /// Configuration key of the policy that produced the violation.
    pub fn config_key(&self) -> &'static str {
        match self {
            ViolationKind::CyclicBoundary => "cyclicDependents",
            ViolationKind::PrivilegedAccess => "globalScopeFilter",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::CyclicBoundary => write!(f, "cyclic boundary"),
            ViolationKind::PrivilegedAccess => write!(f, "privileged access"),
        }
    }
}

/// A dependency edge that breaks a boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Violation {
    /// A file inside the packages root depends on a file outside it.
    CyclicBoundary { referrer: PathBuf, target: PathBuf },

    /// A file depends on privileged package files without an exception.
    PrivilegedAccess {
        referrer: PathBuf,
        /// Privileged packages that own the disallowed files
        packages: BTreeSet<PackageName>,
        disallowed: BTreeSet<PathBuf>,
    },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::CyclicBoundary { .. } => ViolationKind::CyclicBoundary,
            Violation::PrivilegedAccess { .. } => ViolationKind::PrivilegedAccess,
        }
    }

    /// The file whose dependency graph contains the edge.
    pub fn referrer(&self) -> &Path {
        match self {
            Violation::CyclicBoundary { referrer, .. } => referrer,
            Violation::PrivilegedAccess { referrer, .. } => referrer,
        }
    }

    /// Files the referrer must not depend on.
    pub fn targets(&self) -> Vec<&Path> {
        match self {
            Violation::CyclicBoundary { target, .. } => vec![target.as_path()],
            Violation::PrivilegedAccess { disallowed, .. } => {
                disallowed.iter().map(PathBuf::as_path).collect()
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::CyclicBoundary { referrer, target } => write!(
                f,
                "cyclic dependency detected: {} => {}",
                referrer.display(),
                target.display()
            ),
            Violation::PrivilegedAccess {
                referrer,
                packages,
                disallowed,
            } => {
                let packages = packages
                    .iter()
                    .map(PackageName::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                let targets = disallowed
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "access to privileged package {} is not permitted: {} => [{}]",
                    packages,
                    referrer.display(),
                    targets
                )
            }
        }
    }
}

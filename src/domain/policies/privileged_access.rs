//! Privileged Access Policy
//!
//! A privileged package may only be depended upon by itself and by the
//! packages listed in its exceptions. All disallowed targets of one
//! referrer are reported together as a single violation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::entities::Violation;
use crate::domain::value_objects::PackageName;

/// A privileged package and the packages allowed to depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivilegedPackage {
    exceptions: BTreeSet<PackageName>,
}

impl PrivilegedPackage {
    pub fn new(exceptions: impl IntoIterator<Item = PackageName>) -> Self {
        Self {
            exceptions: exceptions.into_iter().collect(),
        }
    }

    pub fn exceptions(&self) -> &BTreeSet<PackageName> {
        &self.exceptions
    }
}

/// Table of privileged packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalScopeFilter {
    packages: BTreeMap<PackageName, PrivilegedPackage>,
}

impl GlobalScopeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a privileged package.
    pub fn with_package(mut self, name: PackageName, package: PrivilegedPackage) -> Self {
        self.packages.insert(name, package);
        self
    }

    pub fn get(&self, name: &PackageName) -> Option<&PrivilegedPackage> {
        self.packages.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &PrivilegedPackage)> {
        self.packages.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true when `requester` may depend on files owned by `owner`.
    ///
    /// Packages that are not privileged are open to everyone.
    pub fn is_permitted(&self, owner: &PackageName, requester: &PackageName) -> bool {
        if owner == requester {
            return true;
        }
        self.packages
            .get(owner)
            .map_or(true, |privileged| privileged.exceptions.contains(requester))
    }
}

impl FromIterator<(PackageName, PrivilegedPackage)> for GlobalScopeFilter {
    fn from_iter<T: IntoIterator<Item = (PackageName, PrivilegedPackage)>>(iter: T) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PrivilegedAccessPolicy<'a> {
    filter: &'a GlobalScopeFilter,
}

impl<'a> PrivilegedAccessPolicy<'a> {
    pub fn new(filter: &'a GlobalScopeFilter) -> Self {
        Self { filter }
    }

    /// Partition the privileged files `file` depends on into permitted and
    /// disallowed ones. `found` maps each reached file to its owning package.
    pub fn evaluate(
        &self,
        file: &Path,
        requester: &PackageName,
        found: &BTreeMap<PathBuf, PackageName>,
    ) -> Option<Violation> {
        let mut packages = BTreeSet::new();
        let mut disallowed = BTreeSet::new();

        for (target, owner) in found {
            if !self.filter.is_permitted(owner, requester) {
                packages.insert(owner.clone());
                disallowed.insert(target.clone());
            }
        }

        if disallowed.is_empty() {
            return None;
        }

        Some(Violation::PrivilegedAccess {
            referrer: file.to_path_buf(),
            packages,
            disallowed,
        })
    }
}

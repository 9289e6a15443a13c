//! Path and package classification
//!
//! Pure functions over file-system paths. Paths are normalized lexically;
//! nothing here consults the file system, so symlinks are not resolved.

use std::path::{Component, Path, PathBuf};

use crate::error::{AnisotropicError, AnisotropicResult};

use super::PackageName;

/// Lexically normalize a path: drop `.` segments and fold `..` into
/// their parent. `..` never climbs above the root of an absolute path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Join `child` onto `parent` and normalize the result.
pub fn join_normalized(parent: &Path, child: &Path) -> PathBuf {
    normalize(&parent.join(child))
}

/// Returns true iff `path`, made relative to `root`, neither ascends above
/// `root` nor stays absolute. A path is not under itself.
pub fn is_under_root(root: &Path, path: &Path) -> bool {
    let root = normalize(root);
    let path = normalize(path);

    match pathdiff::diff_paths(&path, &root) {
        Some(relative) => {
            !relative.as_os_str().is_empty()
                && !relative.is_absolute()
                && !matches!(relative.components().next(), Some(Component::ParentDir))
        }
        None => false,
    }
}

/// Render a relative path with `/` separators regardless of platform.
pub fn to_slash_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Identify the package that owns `path`.
///
/// The first segment below `packages_root` names the package, or the first
/// two for scoped packages. Fails with `InvalidPath` when `path` is not
/// under `packages_root` or its segments cannot form a package name.
pub fn package_of(packages_root: &Path, path: &Path) -> AnisotropicResult<PackageName> {
    let invalid = || AnisotropicError::InvalidPath {
        path: path.to_path_buf(),
        root: packages_root.to_path_buf(),
    };

    let root = normalize(packages_root);
    let normalized = normalize(path);
    if !is_under_root(&root, &normalized) {
        return Err(invalid());
    }

    let rest = normalized.strip_prefix(&root).map_err(|_| invalid())?;
    let segments = rest
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<&str>>>()
        .ok_or_else(invalid)?;

    PackageName::from_segments(segments).ok_or_else(invalid)
}

use std::path::PathBuf;

use anyhow::{Context, Result};

use anisotropic::domain::value_objects::{join_normalized, ProjectLayout};

/// Resolve the project layout for a command.
///
/// An explicit `--project` is taken relative to the working directory.
/// Otherwise the application root is discovered from the working
/// directory, stepping out of any `node_modules` tree.
pub(crate) fn project_layout(project: Option<PathBuf>) -> Result<ProjectLayout> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    Ok(match project {
        Some(project) => ProjectLayout::new(join_normalized(&cwd, &project)),
        None => ProjectLayout::discover(&cwd),
    })
}

//! `anisotropic package-of`

use std::path::{Path, PathBuf};

use anyhow::Result;

pub fn cmd_package_of(path: &Path, project: Option<PathBuf>, json: bool) -> Result<()> {
    let layout = super::project_root::project_layout(project)?;
    let file = layout.resolve_file(path);
    let package = layout.package_of(&file)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "package",
            "file": file,
            "package": package.as_str(),
            "scoped": package.is_scoped(),
        }))?;
    } else {
        println!("{}", package);
    }

    Ok(())
}

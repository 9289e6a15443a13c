//! `anisotropic check`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use anisotropic::config::{load_or_default, load_with_warnings, resolve_config, ConfigWarning};
use anisotropic::{
    CheckUseCase, CollectingResolver, GlobFileEnumerator, MadgeJsonAnalyzer, PolicyEngine,
    PolicySettings, ResolveMode,
};

use crate::ui::text;

/// Returns `Ok(false)` when violations should fail the run.
pub fn cmd_check(
    graph: &Path,
    project: Option<PathBuf>,
    config: Option<PathBuf>,
    warn: bool,
    json: bool,
) -> Result<bool> {
    let layout = super::project_root::project_layout(project)?;

    let (settings, warnings) = match &config {
        Some(path) => load_with_warnings(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => load_or_default(layout.root()).with_context(|| {
            format!("Failed to load policy file in {}", layout.root().display())
        })?,
    };
    report_config_warnings(&warnings, json)?;

    let policy =
        resolve_config(PolicySettings::defaults(), settings).context("Invalid policy settings")?;
    let warn = warn || policy.resolve == ResolveMode::Warn;

    let analyzer = Arc::new(
        MadgeJsonAnalyzer::load(layout.root(), graph)
            .with_context(|| format!("Failed to read dependency graph {}", graph.display()))?
            .with_packages_root(layout.packages_root()),
    );
    let engine = PolicyEngine::new(
        layout,
        analyzer.clone(),
        Arc::new(GlobFileEnumerator::new()),
    );

    let resolver = CollectingResolver::new();
    let report = CheckUseCase::new(&engine).execute(analyzer.files(), &policy, &resolver)?;
    let failed = !report.is_clean() && !warn;

    if json {
        for violation in resolver.into_violations() {
            crate::ui::json::emit(crate::ui::json::violation_event(&violation)?)?;
        }
        crate::ui::json::emit(crate::ui::json::complete_event(&report, failed))?;
    } else {
        for violation in resolver.into_violations() {
            eprintln!("{}", text::render_violation(&violation, warn));
        }
        println!("{}", text::render_summary(&report));
    }

    Ok(!failed)
}

fn report_config_warnings(warnings: &[ConfigWarning], json: bool) -> Result<()> {
    for warning in warnings {
        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file,
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?;
        } else {
            tracing::warn!("{}", warning);
        }
    }
    Ok(())
}

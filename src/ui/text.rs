//! Plain-text rendering of check results

use anisotropic::{CheckReport, Violation};

pub fn render_violation(violation: &Violation, warn: bool) -> String {
    let level = if warn { "warning" } else { "error" };
    format!(
        "{}[{}]: {}",
        level,
        violation.kind().config_key(),
        violation
    )
}

pub fn render_summary(report: &CheckReport) -> String {
    let noun = if report.files_checked == 1 { "file" } else { "files" };
    match report.violations {
        0 => format!(
            "Checked {} package {}: no violations",
            report.files_checked, noun
        ),
        n => format!(
            "Checked {} package {}: {} violation{}",
            report.files_checked,
            noun,
            n,
            if n == 1 { "" } else { "s" }
        ),
    }
}

use std::io::{self, Write};

use anisotropic::{CheckReport, Violation};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Fails when the violation cannot be represented as JSON (non UTF-8 paths).
pub fn violation_event(violation: &Violation) -> io::Result<serde_json::Value> {
    let record = serde_json::to_value(violation).map_err(io::Error::other)?;
    Ok(serde_json::json!({
        "event": "violation",
        "policy": violation.kind().config_key(),
        "message": violation.to_string(),
        "violation": record,
    }))
}

pub fn complete_event(report: &CheckReport, failed: bool) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "check",
        "status": if failed { "failure" } else { "success" },
        "files_checked": report.files_checked,
        "skipped": report.skipped,
        "violations": report.violations,
    })
}

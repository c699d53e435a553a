//! Loading workspace reports from JSON.

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use super::schema::WorkspaceReport;
use crate::{GatesDiffError, GatesDiffResult};

/// Parse a workspace report from its JSON text.
pub fn load_reports(content: &str) -> GatesDiffResult<WorkspaceReport> {
    serde_json::from_str(content).map_err(|e| GatesDiffError::Parse(e.to_string()))
}

/// Read and parse a workspace report file.
pub fn load_reports_from_path(path: &Path) -> GatesDiffResult<WorkspaceReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    let report = load_reports(&content).map_err(|e| match e {
        GatesDiffError::Parse(msg) => GatesDiffError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    debug!(
        path = %path.display(),
        programs = report.programs.len(),
        contracts = report.contracts.len(),
        "loaded workspace report"
    );
    Ok(report)
}

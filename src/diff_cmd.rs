//! Diff two workspace reports and render the changes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use tracing::info;

use crate::config::{ReportConfig, ReportSettings, load_config};
use crate::core::load_reports_from_path;
use crate::diff::{WorkspaceDiffReport, computed_workspace_diff};
use crate::report::{Ansi, Plain, format_markdown_diff, format_shell_diff_with};
use crate::{GatesDiffError, GatesDiffResult};

/// Rendering of the diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width tables for the terminal
    #[default]
    Shell,
    /// Markdown tables for PR comments
    Markdown,
    /// Machine-readable workspace diff
    Json,
}

/// Configuration for the diff command
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Baseline report (e.g. from the target branch)
    pub base: PathBuf,
    /// Report to compare against the baseline
    pub report: PathBuf,
    pub format: OutputFormat,
    pub header: Option<String>,
    pub repository: Option<String>,
    pub commit: Option<String>,
    pub ref_commit: Option<String>,
    pub summary_quantile: Option<f64>,
    /// Emit ANSI colors in shell output
    pub color: bool,
    pub config: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

fn resolve_settings(options: &DiffOptions) -> GatesDiffResult<ReportSettings> {
    let file = match &options.config {
        Some(path) => load_config(path)?,
        None => ReportConfig::default(),
    };
    ReportSettings::resolve(
        file,
        options.header.clone(),
        options.repository.clone(),
        options.summary_quantile,
    )
}

/// Render a computed diff in the requested format.
pub fn render(
    diff: &WorkspaceDiffReport,
    options: &DiffOptions,
    settings: &ReportSettings,
) -> GatesDiffResult<String> {
    match options.format {
        OutputFormat::Json => serde_json::to_string_pretty(diff)
            .map_err(|e| GatesDiffError::Message(format!("failed to serialize diff: {e}"))),
        OutputFormat::Markdown => {
            let repository = settings.repository.as_deref().ok_or_else(|| {
                GatesDiffError::Message("--repository is required for markdown output".into())
            })?;
            let commit = options
                .commit
                .as_deref()
                .ok_or_else(|| GatesDiffError::Message("--commit is required for markdown output".into()))?;
            Ok(format_markdown_diff(
                &settings.header,
                &diff.flatten(),
                repository,
                commit,
                options.ref_commit.as_deref(),
                settings.summary_quantile,
            ))
        }
        OutputFormat::Shell => {
            let rows = diff.flatten();
            Ok(if options.color {
                format_shell_diff_with(&rows, settings.summary_quantile, &Ansi)
            } else {
                format_shell_diff_with(&rows, settings.summary_quantile, &Plain)
            })
        }
    }
}

/// Load both reports, diff them and render the result.
pub fn diff(options: &DiffOptions) -> GatesDiffResult<(WorkspaceDiffReport, String)> {
    let settings = resolve_settings(options)?;

    let source = load_reports_from_path(&options.base)?;
    let compare = load_reports_from_path(&options.report)?;
    info!(
        base = %options.base.display(),
        report = %options.report.display(),
        "loaded reports"
    );

    let workspace_diff = computed_workspace_diff(&source, &compare)?;
    let output = render(&workspace_diff, options, &settings)?;
    Ok((workspace_diff, output))
}

fn write_output(path: &Path, output: &str) -> GatesDiffResult<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    std::fs::write(path, output)
        .map_err(|e| GatesDiffError::Message(format!("failed to write {}: {e}", path.display())))
}

/// Main entry point for the diff command
pub fn run(options: DiffOptions) -> GatesDiffResult<WorkspaceDiffReport> {
    let (workspace_diff, output) = diff(&options)?;

    match &options.out {
        Some(path) => {
            write_output(path, &output)?;
            info!(path = %path.display(), "wrote diff report");
        }
        None => println!("{output}"),
    }

    Ok(workspace_diff)
}

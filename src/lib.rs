pub mod config;
pub mod core;
pub mod diff;
pub mod diff_cmd;
pub mod report;

use thiserror::Error;

pub use crate::core::{WorkspaceReport, load_reports, load_reports_from_path};
pub use crate::diff::{
    ContractDiffReport, DiffProgram, Variation, WorkspaceDiffReport, compute_contract_diffs,
    compute_program_diffs, computed_workspace_diff, variation,
};
pub use crate::report::{format_markdown_diff, format_shell_diff};

#[derive(Debug, Error)]
pub enum GatesDiffError {
    #[error("{0}")]
    Message(String),
    #[error("failed to parse workspace report: {0}")]
    Parse(String),
    #[error("report `{name}` has no functions to compare")]
    MissingMainFunction { name: String },
    #[error("summary quantile must be within [0, 1], got {0}")]
    InvalidQuantile(f64),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type GatesDiffResult<T> = Result<T, GatesDiffError>;

//! Diff engine: compares two workspace reports entity by entity.

pub mod variation;
pub mod workspace;

pub use variation::{Variation, variation};
pub use workspace::{
    ContractDiffReport, DiffProgram, WorkspaceDiffReport, compute_contract_diffs, compute_program_diffs,
    computed_workspace_diff,
};

//! Workspace report schema - the compiler's `info --json` output for a whole workspace.

use serde::{Deserialize, Serialize};

/// Metrics for a single compiled function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitReport {
    pub name: String,
    pub acir_opcodes: u64,
    pub circuit_size: u64,
}

/// A binary package. Only the first function (`main`) takes part in diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramReport {
    pub package_name: String,
    pub functions: Vec<CircuitReport>,
}

impl ProgramReport {
    /// Entry point of the program, if the compiler reported one.
    pub fn main_function(&self) -> Option<&CircuitReport> {
        self.functions.first()
    }
}

/// A contract and the metrics of each of its functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReport {
    pub name: String,
    pub functions: Vec<CircuitReport>,
}

impl ContractReport {
    /// View every contract function as a standalone single-function program.
    ///
    /// Contract functions are assumed to have no non-inlined ACIR calls, so each
    /// one is fully described by a single `CircuitReport`.
    pub fn functions_as_programs(&self) -> Vec<ProgramReport> {
        self.functions
            .iter()
            .map(|func| ProgramReport {
                package_name: func.name.clone(),
                functions: vec![func.clone()],
            })
            .collect()
    }
}

/// Snapshot of every program and contract in a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceReport {
    #[serde(default)]
    pub programs: Vec<ProgramReport>,
    #[serde(default)]
    pub contracts: Vec<ContractReport>,
}

//! Matching programs and contract functions across two workspace reports.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::variation::{Variation, variation};
use crate::core::schema::{CircuitReport, ContractReport, ProgramReport, WorkspaceReport};
use crate::{GatesDiffError, GatesDiffResult};

/// Change of one program (or one contract function) between two reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffProgram {
    pub name: String,
    pub acir_opcodes: Variation,
    pub circuit_size: Variation,
}

impl DiffProgram {
    /// True when neither metric moved.
    pub fn is_empty(&self) -> bool {
        self.acir_opcodes.is_unchanged() && self.circuit_size.is_unchanged()
    }
}

/// Function-level changes within one contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractDiffReport {
    pub name: String,
    pub functions: Vec<DiffProgram>,
}

impl ContractDiffReport {
    /// Largest absolute circuit size change among the contract's functions.
    pub fn max_circuit_size_change(&self) -> f64 {
        self.functions
            .iter()
            .map(|f| f.circuit_size.percentage.abs())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Full diff of a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceDiffReport {
    pub programs: Vec<DiffProgram>,
    pub contracts: Vec<ContractDiffReport>,
}

impl WorkspaceDiffReport {
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty() && self.contracts.is_empty()
    }

    /// Single list of rows for rendering: programs first, then contract functions
    /// named `<contract>::<function>`.
    pub fn flatten(&self) -> Vec<DiffProgram> {
        let contract_functions = self.contracts.iter().flat_map(|contract| {
            contract.functions.iter().map(move |func| DiffProgram {
                name: format!("{}::{}", contract.name, func.name),
                ..func.clone()
            })
        });
        self.programs.iter().cloned().chain(contract_functions).collect()
    }
}

fn warn_duplicates<'a>(side: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            warn!(side = side, entry = name, "duplicate entry, only the first one is compared");
        }
    }
}

/// Names of `compare` entries that also exist in `source`, in `compare` order.
fn common_names<'a, T>(source: &'a [T], compare: &'a [T], name_of: fn(&T) -> &str) -> Vec<&'a str> {
    let source_names: HashSet<&str> = source.iter().map(name_of).collect();
    compare
        .iter()
        .map(name_of)
        .filter(|name| source_names.contains(name))
        .collect()
}

fn program_name(report: &ProgramReport) -> &str {
    &report.package_name
}

fn contract_name(report: &ContractReport) -> &str {
    &report.name
}

fn main_function<'a>(reports: &'a [ProgramReport], name: &str) -> GatesDiffResult<&'a CircuitReport> {
    reports
        .iter()
        .find(|report| report.package_name == name)
        .and_then(ProgramReport::main_function)
        .ok_or_else(|| GatesDiffError::MissingMainFunction { name: name.to_string() })
}

fn compute_circuit_diff(source: &CircuitReport, compare: &CircuitReport, name: &str) -> DiffProgram {
    DiffProgram {
        name: name.to_string(),
        acir_opcodes: variation(compare.acir_opcodes as f64, source.acir_opcodes as f64),
        circuit_size: variation(compare.circuit_size as f64, source.circuit_size as f64),
    }
}

/// Diff the programs present in both reports.
///
/// Programs are matched by package name and compared on their first function only.
/// Unchanged programs are dropped; the rest is sorted by circuit size change,
/// largest increase first.
///
/// # Errors
/// Returns `MissingMainFunction` when a matched program reports no function.
pub fn compute_program_diffs(
    source: &[ProgramReport],
    compare: &[ProgramReport],
) -> GatesDiffResult<Vec<DiffProgram>> {
    warn_duplicates("baseline", source.iter().map(program_name));
    warn_duplicates("compared", compare.iter().map(program_name));

    let mut diffs = Vec::new();
    for name in common_names(source, compare, program_name) {
        let diff = compute_circuit_diff(main_function(source, name)?, main_function(compare, name)?, name);
        debug!(
            program = name,
            acir_delta = diff.acir_opcodes.delta,
            circuit_delta = diff.circuit_size.delta,
            "compared program"
        );
        if !diff.is_empty() {
            diffs.push(diff);
        }
    }

    diffs.sort_by(|a, b| b.circuit_size.percentage.total_cmp(&a.circuit_size.percentage));
    Ok(diffs)
}

fn compute_contract_diff(source: &ContractReport, compare: &ContractReport) -> GatesDiffResult<ContractDiffReport> {
    let functions = compute_program_diffs(&source.functions_as_programs(), &compare.functions_as_programs())?;
    Ok(ContractDiffReport {
        name: source.name.clone(),
        functions,
    })
}

/// Diff the contracts present in both reports, function by function.
///
/// Contracts without any changed function are dropped; the rest is sorted by the
/// largest absolute circuit size change among their functions.
///
/// # Errors
/// Propagates errors from [`compute_program_diffs`].
pub fn compute_contract_diffs(
    source: &[ContractReport],
    compare: &[ContractReport],
) -> GatesDiffResult<Vec<ContractDiffReport>> {
    warn_duplicates("baseline", source.iter().map(contract_name));
    warn_duplicates("compared", compare.iter().map(contract_name));

    let mut diffs = Vec::new();
    for name in common_names(source, compare, contract_name) {
        let (Some(src), Some(cmp)) = (
            source.iter().find(|c| c.name == name),
            compare.iter().find(|c| c.name == name),
        ) else {
            continue;
        };
        let diff = compute_contract_diff(src, cmp)?;
        if !diff.functions.is_empty() {
            diffs.push(diff);
        }
    }

    diffs.sort_by(|a, b| b.max_circuit_size_change().total_cmp(&a.max_circuit_size_change()));
    Ok(diffs)
}

/// Diff every program and contract of two workspace reports.
///
/// # Errors
/// Returns `MissingMainFunction` when a matched program reports no function.
pub fn computed_workspace_diff(
    source: &WorkspaceReport,
    compare: &WorkspaceReport,
) -> GatesDiffResult<WorkspaceDiffReport> {
    let report = WorkspaceDiffReport {
        programs: compute_program_diffs(&source.programs, &compare.programs)?,
        contracts: compute_contract_diffs(&source.contracts, &compare.contracts)?,
    };
    info!(
        programs = report.programs.len(),
        contracts = report.contracts.len(),
        "computed workspace diff"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circuit(name: &str, acir_opcodes: u64, circuit_size: u64) -> CircuitReport {
        CircuitReport {
            name: name.to_string(),
            acir_opcodes,
            circuit_size,
        }
    }

    fn program(name: &str, acir_opcodes: u64, circuit_size: u64) -> ProgramReport {
        ProgramReport {
            package_name: name.to_string(),
            functions: vec![circuit("main", acir_opcodes, circuit_size)],
        }
    }

    fn contract(name: &str, functions: Vec<CircuitReport>) -> ContractReport {
        ContractReport {
            name: name.to_string(),
            functions,
        }
    }

    #[test]
    fn test_program_diff_single_entry() {
        let source = vec![program("a", 100, 200)];
        let compare = vec![program("a", 150, 180)];

        let diffs = compute_program_diffs(&source, &compare).unwrap();

        assert_eq!(
            diffs,
            vec![DiffProgram {
                name: "a".to_string(),
                acir_opcodes: Variation { previous: 100.0, current: 150.0, delta: 50.0, percentage: 50.0 },
                circuit_size: Variation { previous: 200.0, current: 180.0, delta: -20.0, percentage: -10.0 },
            }]
        );
    }

    #[test]
    fn test_program_diff_against_itself_is_empty() {
        let report = vec![program("a", 1, 2), program("b", 30, 40), program("c", 0, 0)];
        assert!(compute_program_diffs(&report, &report).unwrap().is_empty());
    }

    #[test]
    fn test_program_diff_ignores_unmatched_names() {
        let source = vec![program("only_source", 1, 1), program("both", 10, 10)];
        let compare = vec![program("both", 20, 20), program("only_compare", 5, 5)];

        let diffs = compute_program_diffs(&source, &compare).unwrap();
        let names: Vec<&str> = diffs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["both"]);
    }

    #[test]
    fn test_program_diff_keeps_single_metric_changes() {
        let source = vec![program("acir_only", 10, 100), program("size_only", 10, 100)];
        let compare = vec![program("acir_only", 11, 100), program("size_only", 10, 101)];

        let diffs = compute_program_diffs(&source, &compare).unwrap();
        assert_eq!(diffs.len(), 2);
    }

    #[test]
    fn test_program_diff_sorted_by_signed_percentage() {
        let source = vec![
            program("shrunk", 10, 100),
            program("grew_a_bit", 10, 100),
            program("grew_a_lot", 10, 100),
            program("from_zero", 0, 0),
        ];
        let compare = vec![
            program("shrunk", 10, 10),
            program("grew_a_bit", 10, 105),
            program("from_zero", 3, 7),
            program("grew_a_lot", 10, 150),
        ];

        let diffs = compute_program_diffs(&source, &compare).unwrap();
        let names: Vec<&str> = diffs.iter().map(|d| d.name.as_str()).collect();
        // -90% sorts last even though it is the largest change in magnitude
        assert_eq!(names, vec!["from_zero", "grew_a_lot", "grew_a_bit", "shrunk"]);

        for pair in diffs.windows(2) {
            assert!(pair[0].circuit_size.percentage >= pair[1].circuit_size.percentage);
        }
    }

    #[test]
    fn test_program_diff_uses_main_function_only() {
        let source = vec![ProgramReport {
            package_name: "a".to_string(),
            functions: vec![circuit("main", 10, 10), circuit("helper", 1, 1)],
        }];
        let compare = vec![ProgramReport {
            package_name: "a".to_string(),
            functions: vec![circuit("main", 10, 10), circuit("helper", 99, 99)],
        }];

        assert!(compute_program_diffs(&source, &compare).unwrap().is_empty());
    }

    #[test]
    fn test_program_diff_first_match_wins() {
        let source = vec![program("a", 10, 10), program("a", 1000, 1000)];
        let compare = vec![program("a", 20, 20)];

        let diffs = compute_program_diffs(&source, &compare).unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].circuit_size.previous, 10.0);
    }

    #[test]
    fn test_program_diff_duplicate_compared_name() {
        let source = vec![program("a", 1, 1)];
        let compare = vec![program("a", 2, 2), program("a", 3, 3)];

        let diffs = compute_program_diffs(&source, &compare).unwrap();
        assert_eq!(diffs.len(), 2);
        for diff in &diffs {
            assert_eq!(diff.name, "a");
            assert_eq!(diff.acir_opcodes.current, 2.0);
            assert_eq!(diff.circuit_size.current, 2.0);
            assert_eq!(diff.circuit_size.previous, 1.0);
        }
    }

    #[test]
    fn test_program_diff_missing_main_function() {
        let source = vec![ProgramReport { package_name: "a".to_string(), functions: vec![] }];
        let compare = vec![program("a", 1, 1)];

        let err = compute_program_diffs(&source, &compare).unwrap_err();
        assert!(matches!(err, GatesDiffError::MissingMainFunction { ref name } if name == "a"));
    }

    #[test]
    fn test_program_diff_empty_functions_unmatched_is_fine() {
        let source = vec![ProgramReport { package_name: "lonely".to_string(), functions: vec![] }];
        let compare = vec![program("a", 1, 1)];

        assert!(compute_program_diffs(&source, &compare).unwrap().is_empty());
    }

    #[test]
    fn test_contract_diffs() {
        let source = vec![
            contract("Token", vec![circuit("mint", 10, 100), circuit("burn", 10, 100)]),
            contract("Vault", vec![circuit("deposit", 10, 100)]),
            contract("Static", vec![circuit("noop", 1, 1)]),
        ];
        let compare = vec![
            contract("Static", vec![circuit("noop", 1, 1)]),
            contract("Token", vec![circuit("mint", 12, 110), circuit("burn", 10, 100)]),
            contract("Vault", vec![circuit("deposit", 5, 50)]),
            contract("New", vec![circuit("init", 1, 1)]),
        ];

        let diffs = compute_contract_diffs(&source, &compare).unwrap();

        // Vault's -50% outranks Token's +10% on absolute change
        let names: Vec<&str> = diffs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Vault", "Token"]);

        assert_eq!(diffs[1].functions.len(), 1);
        assert_eq!(diffs[1].functions[0].name, "mint");
        assert_eq!(diffs[1].functions[0].circuit_size.delta, 10.0);
    }

    #[test]
    fn test_workspace_diff() {
        let source = WorkspaceReport {
            programs: vec![program("a", 100, 200)],
            contracts: vec![contract("Token", vec![circuit("mint", 10, 100)])],
        };
        let compare = WorkspaceReport {
            programs: vec![program("a", 150, 180)],
            contracts: vec![contract("Token", vec![circuit("mint", 10, 120)])],
        };

        let diff = computed_workspace_diff(&source, &compare).unwrap();
        assert_eq!(diff.programs.len(), 1);
        assert_eq!(diff.contracts.len(), 1);
        assert!(!diff.is_empty());

        let rows = diff.flatten();
        let names: Vec<&str> = rows.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "Token::mint"]);
        assert_eq!(rows[1].circuit_size, diff.contracts[0].functions[0].circuit_size);
    }

    #[test]
    fn test_workspace_diff_identical_is_empty() {
        let report = WorkspaceReport {
            programs: vec![program("a", 1, 2)],
            contracts: vec![contract("Token", vec![circuit("mint", 10, 100)])],
        };

        let diff = computed_workspace_diff(&report, &report).unwrap();
        assert!(diff.is_empty());
        assert!(diff.flatten().is_empty());
    }
}

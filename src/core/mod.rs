//! Core types for gates-diff.
//!
//! This module contains the `WorkspaceReport` input schema and its JSON loader.

pub mod load;
pub mod schema;

// Re-export key types for convenience
pub use load::{load_reports, load_reports_from_path};
pub use schema::{CircuitReport, ContractReport, ProgramReport, WorkspaceReport};

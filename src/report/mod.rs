//! Reporting module for circuit size diffs.
//!
//! This module provides:
//! - Significance selection of the summary rows (`selection`)
//! - Terminal rendering with pluggable coloring (`shell`, `style`)
//! - Markdown rendering for PR comments (`markdown`)

pub mod markdown;
pub mod number;
pub mod selection;
pub mod shell;
pub mod style;

// Re-export key types
pub use markdown::{TextAlign, format_markdown_diff, format_markdown_full_cell, format_markdown_summary_cell};
pub use number::group_thousands;
pub use selection::{DEFAULT_SUMMARY_QUANTILE, circuit_change_quantile, select_summary_diffs, summary_diffs};
pub use shell::{format_shell_cell, format_shell_diff, format_shell_diff_with};
pub use style::{Ansi, Paint, Plain, Style};

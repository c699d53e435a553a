//! Picks the most significant diffs for the summary section of a report.

use crate::diff::DiffProgram;

/// By default the summary holds the top 20% circuit size changes.
pub const DEFAULT_SUMMARY_QUANTILE: f64 = 0.8;

/// Absolute circuit size change at `summary_quantile` among `diffs`.
///
/// Returns 0 for an empty list or a quantile that does not index into it.
pub fn circuit_change_quantile(diffs: &[DiffProgram], summary_quantile: f64) -> f64 {
    let mut changes: Vec<f64> = diffs
        .iter()
        .map(|diff| diff.circuit_size.percentage.abs())
        .collect();
    changes.sort_by(f64::total_cmp);

    let position = ((changes.len() as f64 - 1.0) * summary_quantile).floor();
    if !position.is_finite() || position < 0.0 {
        return 0.0;
    }
    changes.get(position as usize).copied().unwrap_or(0.0)
}

/// Diffs whose absolute circuit size change reaches `min_change`, in their original order.
pub fn select_summary_diffs(diffs: &[DiffProgram], min_change: f64) -> Vec<&DiffProgram> {
    diffs
        .iter()
        .filter(|diff| diff.circuit_size.percentage.abs() >= min_change && !diff.is_empty())
        .collect()
}

/// Summary rows for `summary_quantile`.
pub fn summary_diffs(diffs: &[DiffProgram], summary_quantile: f64) -> Vec<&DiffProgram> {
    select_summary_diffs(diffs, circuit_change_quantile(diffs, summary_quantile))
}

/// Share of diffs the summary is meant to show, as a whole percentage.
pub fn summary_share(summary_quantile: f64) -> i64 {
    ((1.0 - summary_quantile) * 100.0).round() as i64
}

pub fn summary_title(summary_quantile: f64) -> String {
    format!(
        "🧾 Summary ({}% most significant diffs)",
        summary_share(summary_quantile)
    )
}

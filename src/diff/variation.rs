//! Numeric variation between two snapshots of a metric.

use serde::{Serialize, Serializer};

/// Change of a single metric between the baseline and the compared report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variation {
    /// Baseline value
    pub previous: f64,
    /// Compared value
    pub current: f64,
    /// Absolute delta (current - previous)
    pub delta: f64,
    /// Percentage change relative to `previous`; `+inf` when `previous` is zero
    #[serde(serialize_with = "serialize_percentage")]
    pub percentage: f64,
}

impl Variation {
    pub fn is_unchanged(&self) -> bool {
        self.delta == 0.0
    }
}

/// JSON has no infinity, so infinite percentages are written as `"inf"` / `"-inf"`.
fn serialize_percentage<S: Serializer>(percentage: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if percentage.is_infinite() {
        serializer.serialize_str(if percentage.is_sign_positive() { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*percentage)
    }
}

/// Compute the variation from `previous` to `current`.
///
/// A zero baseline always yields an infinite percentage, whatever the sign of the delta.
pub fn variation(current: f64, previous: f64) -> Variation {
    let delta = current - previous;
    let percentage = if previous != 0.0 {
        100.0 * delta / previous
    } else {
        f64::INFINITY
    };

    Variation {
        previous,
        current,
        delta,
        percentage,
    }
}

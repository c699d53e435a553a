use std::path::Path;

use serde::Deserialize;

use crate::report::DEFAULT_SUMMARY_QUANTILE;
use crate::{GatesDiffError, GatesDiffResult};

pub const DEFAULT_HEADER: &str = "# Changes to circuit sizes";

/// `[report]` table of a `gates-diff.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportConfig {
    pub header: Option<String>,
    pub repository: Option<String>,
    pub summary_quantile: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct GatesDiffConfig {
    #[serde(default)]
    report: ReportConfig,
}

pub fn parse_config(s: &str) -> GatesDiffResult<ReportConfig> {
    let cfg: GatesDiffConfig = toml::from_str(s).map_err(|e| GatesDiffError::Message(e.to_string()))?;
    Ok(cfg.report)
}

pub fn load_config(path: &Path) -> GatesDiffResult<ReportConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| GatesDiffError::Message(format!("failed to read config {}: {e}", path.display())))?;
    parse_config(&s)
}

/// Reject quantiles outside of `[0, 1]`.
pub fn validate_quantile(summary_quantile: f64) -> GatesDiffResult<f64> {
    if (0.0..=1.0).contains(&summary_quantile) {
        Ok(summary_quantile)
    } else {
        Err(GatesDiffError::InvalidQuantile(summary_quantile))
    }
}

/// Rendering settings after merging CLI flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub header: String,
    pub repository: Option<String>,
    pub summary_quantile: f64,
}

impl ReportSettings {
    pub fn resolve(
        file: ReportConfig,
        header: Option<String>,
        repository: Option<String>,
        summary_quantile: Option<f64>,
    ) -> GatesDiffResult<Self> {
        let summary_quantile = summary_quantile
            .or(file.summary_quantile)
            .unwrap_or(DEFAULT_SUMMARY_QUANTILE);
        Ok(ReportSettings {
            header: header.or(file.header).unwrap_or_else(|| DEFAULT_HEADER.to_string()),
            repository: repository.or(file.repository),
            summary_quantile: validate_quantile(summary_quantile)?,
        })
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            header: DEFAULT_HEADER.to_string(),
            repository: None,
            summary_quantile: DEFAULT_SUMMARY_QUANTILE,
        }
    }
}

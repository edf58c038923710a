//! Output formatters for audit findings.

pub mod json;
pub mod plain;

use crate::analyzer::evaluate::CheckRun;
use crate::analyzer::types::Finding;
use serde::{Deserialize, Serialize};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Plain,
    /// JSON output.
    Json,
}

/// Format the findings of a single check.
pub fn format_findings(
    findings: &[Finding],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(plain::format(findings)),
        OutputFormat::Json => json::format(findings),
    }
}

/// Format the results of a multi-check run.
pub fn format_runs(runs: &[CheckRun], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(plain::format_runs(runs)),
        OutputFormat::Json => json::format_runs(runs),
    }
}

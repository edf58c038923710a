//! JSON formatter.

use crate::analyzer::evaluate::CheckRun;
use crate::analyzer::types::Finding;

/// Format findings as a JSON array. An empty slice yields `[]`.
pub fn format(findings: &[Finding]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(findings)
}

/// Format a multi-check run as an array of `{check, findings}` objects.
pub fn format_runs(runs: &[CheckRun]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(runs)
}

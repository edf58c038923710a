use crate::analyzer::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Kubeconfig used to reach the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to select
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Restrict the audit to one namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub fail_on_findings: bool,
}

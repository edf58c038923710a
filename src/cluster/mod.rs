//! Cluster data providers.
//!
//! A provider returns a snapshot of every workload in scope. Evaluation only
//! starts once the whole snapshot has been fetched; a provider failure aborts
//! the run before any finding is produced.

pub mod client;
pub mod manifest;

pub use client::KubeSource;
pub use manifest::ManifestSource;

use crate::analyzer::Snapshot;
use std::future::Future;
use std::path::PathBuf;

/// Error type for cluster data providers.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("Failed to create Kubernetes client: {0}")]
    ClientCreation(#[from] kube::Error),

    #[error("Failed to infer Kubernetes config: {0}")]
    ConfigError(#[from] kube::config::InferConfigError),

    #[error("Failed to read kubeconfig: {0}")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Failed to read snapshot file {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot file {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Which namespaces to list workloads from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListScope {
    #[default]
    AllNamespaces,
    Namespace(String),
}

impl ListScope {
    /// Whether a workload in `namespace` falls inside this scope.
    pub fn contains(&self, namespace: &str) -> bool {
        match self {
            Self::AllNamespaces => true,
            Self::Namespace(ns) => ns == namespace,
        }
    }
}

impl From<Option<String>> for ListScope {
    fn from(namespace: Option<String>) -> Self {
        match namespace {
            Some(ns) => Self::Namespace(ns),
            None => Self::AllNamespaces,
        }
    }
}

/// A source of workload snapshots.
pub trait WorkloadSource {
    /// List every workload in scope.
    fn list_workloads(
        &self,
        scope: &ListScope,
    ) -> impl Future<Output = Result<Snapshot, ClusterError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_scope() {
        assert!(ListScope::AllNamespaces.contains("anything"));
        let scope = ListScope::from(Some("shop".to_string()));
        assert!(scope.contains("shop"));
        assert!(!scope.contains("default"));
        assert_eq!(ListScope::from(None), ListScope::AllNamespaces);
    }
}

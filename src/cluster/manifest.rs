//! Offline workload source reading a saved pod listing.
//!
//! Accepts the output of `kubectl get pods -A -o yaml` (or `-o json`), a
//! multi-document YAML stream of pods, or a mix of both.

use super::{ClusterError, ListScope, WorkloadSource};
use crate::analyzer::Snapshot;
use crate::analyzer::extract::workload_from_pod;
use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::PathBuf;

/// Workload source backed by a YAML or JSON file.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self, scope: &ListScope) -> Result<Snapshot, ClusterError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ClusterError::ManifestRead {
            path: self.path.clone(),
            source,
        })?;

        let pods = parse_pods(&content).map_err(|source| ClusterError::ManifestParse {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Loaded {} pod(s) from {}", pods.len(), self.path.display());

        Ok(pods
            .iter()
            .map(workload_from_pod)
            .filter(|w| scope.contains(&w.namespace))
            .collect())
    }
}

impl WorkloadSource for ManifestSource {
    async fn list_workloads(&self, scope: &ListScope) -> Result<Snapshot, ClusterError> {
        self.load(scope)
    }
}

/// Parse every pod in a YAML/JSON stream, in document order.
pub fn parse_pods(content: &str) -> Result<Vec<Pod>, serde_yaml::Error> {
    let mut pods = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)?;
        collect_pods(value, &mut pods)?;
    }
    Ok(pods)
}

fn collect_pods(value: Value, pods: &mut Vec<Pod>) -> Result<(), serde_yaml::Error> {
    if value.is_null() {
        return Ok(());
    }

    let kind = value.get("kind").and_then(Value::as_str).map(str::to_string);
    match kind.as_deref() {
        Some("List") | Some("PodList") => {
            if let Some(Value::Sequence(items)) = value.get("items") {
                for item in items {
                    collect_pods(item.clone(), pods)?;
                }
            }
        }
        Some("Pod") | None => pods.push(pod_from_value(value)?),
        Some(other) => log::debug!("Skipping {} document", other),
    }
    Ok(())
}

/// Deserialize a pod, filling in the type fields list items may omit.
fn pod_from_value(mut value: Value) -> Result<Pod, serde_yaml::Error> {
    if let Value::Mapping(map) = &mut value {
        if !map.contains_key("apiVersion") {
            map.insert("apiVersion".into(), "v1".into());
        }
        if !map.contains_key("kind") {
            map.insert("kind".into(), "Pod".into());
        }
    }
    serde_yaml::from_value(value)
}

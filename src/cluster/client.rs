//! Live cluster provider backed by the Kubernetes API.
//!
//! # Prerequisites
//!
//! - Valid kubeconfig (explicit path, `KUBECONFIG`, `~/.kube/config` or in-cluster)
//! - RBAC permission to list pods in the audited namespaces

use super::{ClusterError, ListScope, WorkloadSource};
use crate::analyzer::Snapshot;
use crate::analyzer::extract::workload_from_pod;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    Client, Config,
    api::{Api, ListParams},
    config::{KubeConfigOptions, Kubeconfig},
};
use std::path::Path;

/// Kubernetes API workload source.
pub struct KubeSource {
    client: Client,
}

impl KubeSource {
    /// Connect using an optional kubeconfig path and context.
    ///
    /// Without a path the standard inference chain is used; a context then
    /// selects an entry from the default kubeconfig.
    pub async fn connect(
        kubeconfig: Option<&Path>,
        context: Option<&str>,
    ) -> Result<Self, ClusterError> {
        // Install rustls crypto provider (required for TLS connections to K8s API)
        let _ = rustls::crypto::ring::default_provider().install_default();

        let options = KubeConfigOptions {
            context: context.map(str::to_string),
            ..Default::default()
        };

        let config = match (kubeconfig, context) {
            (Some(path), _) => {
                log::debug!("Reading kubeconfig from {}", path.display());
                let kubeconfig = Kubeconfig::read_from(path)?;
                Config::from_custom_kubeconfig(kubeconfig, &options).await?
            }
            (None, Some(_)) => {
                let kubeconfig = Kubeconfig::read()?;
                Config::from_custom_kubeconfig(kubeconfig, &options).await?
            }
            (None, None) => Config::infer().await?,
        };

        log::info!("Connecting to Kubernetes API at {}", config.cluster_url);
        let client = Client::try_from(config)?;
        Ok(Self { client })
    }
}

impl WorkloadSource for KubeSource {
    async fn list_workloads(&self, scope: &ListScope) -> Result<Snapshot, ClusterError> {
        let pods: Api<Pod> = match scope {
            ListScope::Namespace(ns) => Api::namespaced(self.client.clone(), ns),
            ListScope::AllNamespaces => Api::all(self.client.clone()),
        };

        let pod_list = pods
            .list(&ListParams::default())
            .await
            .map_err(|e| ClusterError::ApiError(format!("Failed to list pods: {}", e)))?;

        log::info!("Fetched {} pod(s) from the cluster", pod_list.items.len());

        Ok(pod_list.items.iter().map(workload_from_pod).collect())
    }
}

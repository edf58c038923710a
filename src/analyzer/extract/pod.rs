//! Conversion from Kubernetes API pods to audit workloads.

use crate::analyzer::context::object::*;
use k8s_openapi::api::core::v1 as core;

/// Convert a pod into a workload.
///
/// A pod without a spec becomes a workload with no containers and no host
/// sharing.
pub fn workload_from_pod(pod: &core::Pod) -> Workload {
    let metadata = &pod.metadata;
    let mut workload = Workload::new(
        metadata
            .namespace
            .clone()
            .unwrap_or_else(|| "default".to_string()),
        metadata.name.clone().unwrap_or_default(),
    );

    let Some(spec) = &pod.spec else {
        return workload;
    };

    workload.host_network = spec.host_network.unwrap_or(false);
    workload.host_pid = spec.host_pid.unwrap_or(false);
    workload.host_ipc = spec.host_ipc.unwrap_or(false);

    workload.containers = spec.containers.iter().map(container_spec).collect();
    workload.init_containers = spec
        .init_containers
        .iter()
        .flatten()
        .map(container_spec)
        .collect();
    workload.ephemeral_containers = spec
        .ephemeral_containers
        .iter()
        .flatten()
        .map(ephemeral_container_spec)
        .collect();

    workload
}

fn container_spec(c: &core::Container) -> ContainerSpec {
    ContainerSpec {
        name: c.name.clone(),
        security_context: c.security_context.as_ref().map(security_context),
        ports: c.ports.as_ref().map(|ports| ports.iter().map(container_port).collect()),
    }
}

fn ephemeral_container_spec(c: &core::EphemeralContainer) -> ContainerSpec {
    ContainerSpec {
        name: c.name.clone(),
        security_context: c.security_context.as_ref().map(security_context),
        ports: c.ports.as_ref().map(|ports| ports.iter().map(container_port).collect()),
    }
}

fn security_context(sc: &core::SecurityContext) -> SecurityContext {
    SecurityContext {
        allow_privilege_escalation: sc.allow_privilege_escalation,
        privileged: sc.privileged,
        capabilities: sc.capabilities.as_ref().map(|caps| Capabilities {
            add: caps.add.clone(),
            drop: caps.drop.clone(),
        }),
    }
}

fn container_port(p: &core::ContainerPort) -> ContainerPort {
    ContainerPort {
        container_port: p.container_port,
        host_port: p.host_port,
    }
}

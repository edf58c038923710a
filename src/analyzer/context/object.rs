//! Workload object model the checks run against.
//!
//! These are the audit-relevant slice of a Kubernetes pod. Optional fields
//! keep their "absent" state: `None` on a nullable boolean is a distinct
//! answer from `Some(false)`, and several checks depend on that difference.

use crate::analyzer::types::{ContainerCategory, WorkloadRef};

/// A named unit of deployment (a pod).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    pub namespace: String,
    pub name: String,
    pub host_network: bool,
    pub host_pid: bool,
    pub host_ipc: bool,
    pub containers: Vec<ContainerSpec>,
    pub init_containers: Vec<ContainerSpec>,
    pub ephemeral_containers: Vec<ContainerSpec>,
}

impl Workload {
    /// Create an empty workload.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Namespace-qualified reference used by findings.
    pub fn reference(&self) -> WorkloadRef {
        WorkloadRef::new(&self.namespace, &self.name)
    }

    /// Containers of the given category, in declaration order.
    pub fn containers_of(&self, category: ContainerCategory) -> &[ContainerSpec] {
        match category {
            ContainerCategory::Primary => &self.containers,
            ContainerCategory::Init => &self.init_containers,
            ContainerCategory::Ephemeral => &self.ephemeral_containers,
        }
    }

    /// Append a container to the given category.
    pub fn with_container(mut self, category: ContainerCategory, container: ContainerSpec) -> Self {
        match category {
            ContainerCategory::Primary => self.containers.push(container),
            ContainerCategory::Init => self.init_containers.push(container),
            ContainerCategory::Ephemeral => self.ephemeral_containers.push(container),
        }
        self
    }

    pub fn with_host_network(mut self, enabled: bool) -> Self {
        self.host_network = enabled;
        self
    }

    pub fn with_host_pid(mut self, enabled: bool) -> Self {
        self.host_pid = enabled;
        self
    }

    pub fn with_host_ipc(mut self, enabled: bool) -> Self {
        self.host_ipc = enabled;
        self
    }
}

/// A container within a workload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    pub security_context: Option<SecurityContext>,
    pub ports: Option<Vec<ContainerPort>>,
}

impl ContainerSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_security_context(mut self, sc: SecurityContext) -> Self {
        self.security_context = Some(sc);
        self
    }

    pub fn with_port(mut self, port: ContainerPort) -> Self {
        self.ports.get_or_insert_with(Vec::new).push(port);
        self
    }
}

/// Container security context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    /// `None` means the cluster default, which allows escalation.
    pub allow_privilege_escalation: Option<bool>,
    /// `None` and `Some(false)` both mean unprivileged.
    pub privileged: Option<bool>,
    pub capabilities: Option<Capabilities>,
}

impl SecurityContext {
    pub fn with_allow_privilege_escalation(mut self, allowed: bool) -> Self {
        self.allow_privilege_escalation = Some(allowed);
        self
    }

    pub fn with_privileged(mut self, privileged: bool) -> Self {
        self.privileged = Some(privileged);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }
}

/// Linux capability changes. An absent list requests no change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub add: Option<Vec<String>>,
    pub drop: Option<Vec<String>>,
}

impl Capabilities {
    pub fn adding<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            add: Some(names.into_iter().map(Into::into).collect()),
            drop: None,
        }
    }

    pub fn dropping<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            add: None,
            drop: Some(names.into_iter().map(Into::into).collect()),
        }
    }
}

/// A declared container port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerPort {
    pub container_port: i32,
    /// `None` or `Some(0)` means the port is not bound on the host.
    pub host_port: Option<i32>,
}

impl ContainerPort {
    pub fn new(container_port: i32) -> Self {
        Self {
            container_port,
            ..Default::default()
        }
    }

    pub fn with_host_port(mut self, host_port: i32) -> Self {
        self.host_port = Some(host_port);
        self
    }

    /// Host port this declaration binds, if any.
    pub fn bound_host_port(&self) -> Option<i32> {
        self.host_port.filter(|p| *p != 0)
    }
}

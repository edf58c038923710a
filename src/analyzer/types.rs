//! Core types for the workload audit.
//!
//! - `CheckId` - the fixed set of check identifiers
//! - `CheckScope` - whether a check looks at a whole workload or at each container
//! - `ContainerCategory` - primary, init or ephemeral
//! - `Finding` - a single reported violation, one variant per check

use serde::{Serialize, Serializer};
use std::fmt;

/// Identifier of one of the fixed audit checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckId {
    /// Workload shares the host network namespace.
    HostNetwork,
    /// Workload shares the host PID namespace.
    HostPid,
    /// Workload shares the host IPC namespace.
    HostIpc,
    /// Container does not block privilege escalation.
    AllowPrivilegeEscalation,
    /// Container runs privileged.
    Privileged,
    /// Container adds Linux capabilities.
    CapabilitiesAdded,
    /// Container drops Linux capabilities.
    CapabilitiesDropped,
    /// Container binds a port on the host.
    HostPorts,
}

impl CheckId {
    /// Every check, in the order multi-check runs execute them.
    pub const ALL: [CheckId; 8] = [
        CheckId::HostNetwork,
        CheckId::HostPid,
        CheckId::HostIpc,
        CheckId::AllowPrivilegeEscalation,
        CheckId::Privileged,
        CheckId::CapabilitiesAdded,
        CheckId::CapabilitiesDropped,
        CheckId::HostPorts,
    ];

    /// Stable identifier used as the subcommand name and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostNetwork => "hostnet",
            Self::HostPid => "hostpid",
            Self::HostIpc => "hostipc",
            Self::AllowPrivilegeEscalation => "allowprivesc",
            Self::Privileged => "privileged",
            Self::CapabilitiesAdded => "addedcapabilities",
            Self::CapabilitiesDropped => "droppedcapabilities",
            Self::HostPorts => "hostports",
        }
    }

    /// Name the check goes by in finding reports.
    ///
    /// Matches `as_str` except for the capability and host-port checks, whose
    /// findings carry a spaced title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CapabilitiesAdded => "Added Capabilities",
            Self::CapabilitiesDropped => "Dropped Capabilities",
            Self::HostPorts => "Host Ports",
            other => other.as_str(),
        }
    }

    /// Parse a check from its identifier (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == lowered)
    }

    /// Whether the check runs once per workload or once per container.
    pub fn scope(&self) -> CheckScope {
        match self {
            Self::HostNetwork | Self::HostPid | Self::HostIpc => CheckScope::Workload,
            Self::AllowPrivilegeEscalation
            | Self::Privileged
            | Self::CapabilitiesAdded
            | Self::CapabilitiesDropped
            | Self::HostPorts => CheckScope::Container,
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CheckId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What a check is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckScope {
    /// Evaluated once per workload.
    Workload,
    /// Evaluated once per container, identically across every category.
    Container,
}

impl CheckScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workload => "workload",
            Self::Container => "container",
        }
    }
}

impl fmt::Display for CheckScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle role of a container within its workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerCategory {
    Primary,
    Init,
    Ephemeral,
}

/// Container categories in traversal order.
pub const CONTAINER_CATEGORIES: [ContainerCategory; 3] = [
    ContainerCategory::Primary,
    ContainerCategory::Init,
    ContainerCategory::Ephemeral,
];

impl ContainerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "container",
            Self::Init => "init container",
            Self::Ephemeral => "ephemeral container",
        }
    }
}

impl fmt::Display for ContainerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Namespace-qualified workload name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkloadRef {
    pub namespace: String,
    pub name: String,
}

impl WorkloadRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for WorkloadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A container inside a workload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerRef {
    pub workload: WorkloadRef,
    pub container: String,
}

impl ContainerRef {
    pub fn new(workload: &WorkloadRef, container: impl Into<String>) -> Self {
        Self {
            workload: workload.clone(),
            container: container.into(),
        }
    }
}

/// A single reported violation.
///
/// Each variant carries exactly the fields its check reports, so a host-port
/// finding can never carry a capability list and a workload-scoped finding can
/// never name a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    HostNetwork(WorkloadRef),
    HostPid(WorkloadRef),
    HostIpc(WorkloadRef),
    AllowPrivilegeEscalation(ContainerRef),
    Privileged(ContainerRef),
    CapabilitiesAdded {
        container: ContainerRef,
        capabilities: Vec<String>,
    },
    CapabilitiesDropped {
        container: ContainerRef,
        capabilities: Vec<String>,
    },
    HostPort {
        container: ContainerRef,
        host_port: i32,
    },
}

impl Finding {
    /// The check that produced this finding.
    pub fn check(&self) -> CheckId {
        match self {
            Self::HostNetwork(_) => CheckId::HostNetwork,
            Self::HostPid(_) => CheckId::HostPid,
            Self::HostIpc(_) => CheckId::HostIpc,
            Self::AllowPrivilegeEscalation(_) => CheckId::AllowPrivilegeEscalation,
            Self::Privileged(_) => CheckId::Privileged,
            Self::CapabilitiesAdded { .. } => CheckId::CapabilitiesAdded,
            Self::CapabilitiesDropped { .. } => CheckId::CapabilitiesDropped,
            Self::HostPort { .. } => CheckId::HostPorts,
        }
    }

    pub fn workload(&self) -> &WorkloadRef {
        match self {
            Self::HostNetwork(w) | Self::HostPid(w) | Self::HostIpc(w) => w,
            Self::AllowPrivilegeEscalation(c) | Self::Privileged(c) => &c.workload,
            Self::CapabilitiesAdded { container, .. }
            | Self::CapabilitiesDropped { container, .. }
            | Self::HostPort { container, .. } => &container.workload,
        }
    }

    /// Container name, absent for workload-scoped checks.
    pub fn container(&self) -> Option<&str> {
        match self {
            Self::HostNetwork(_) | Self::HostPid(_) | Self::HostIpc(_) => None,
            Self::AllowPrivilegeEscalation(c) | Self::Privileged(c) => Some(&c.container),
            Self::CapabilitiesAdded { container, .. }
            | Self::CapabilitiesDropped { container, .. }
            | Self::HostPort { container, .. } => Some(&container.container),
        }
    }

    /// Capability names, present only for capability checks.
    pub fn capabilities(&self) -> Option<&[String]> {
        match self {
            Self::CapabilitiesAdded { capabilities, .. }
            | Self::CapabilitiesDropped { capabilities, .. } => Some(capabilities),
            _ => None,
        }
    }

    /// Host port, present only for the host-port check.
    pub fn host_port(&self) -> Option<i32> {
        match self {
            Self::HostPort { host_port, .. } => Some(*host_port),
            _ => None,
        }
    }
}

/// Flat wire shape of a finding. Fields that do not apply to the check are omitted.
#[derive(Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "Check")]
    check: &'static str,
    #[serde(rename = "Namespace")]
    namespace: &'a str,
    #[serde(rename = "Pod")]
    pod: &'a str,
    #[serde(rename = "Container", skip_serializing_if = "Option::is_none")]
    container: Option<&'a str>,
    #[serde(rename = "Capabilities", skip_serializing_if = "Option::is_none")]
    capabilities: Option<&'a [String]>,
    #[serde(rename = "Hostport", skip_serializing_if = "Option::is_none")]
    host_port: Option<i32>,
}

impl<'a> From<&'a Finding> for FindingRecord<'a> {
    fn from(f: &'a Finding) -> Self {
        let workload = f.workload();
        Self {
            check: f.check().label(),
            namespace: &workload.namespace,
            pod: &workload.name,
            container: f.container(),
            capabilities: f.capabilities(),
            host_port: f.host_port(),
        }
    }
}

impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FindingRecord::from(self).serialize(serializer)
    }
}

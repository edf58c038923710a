//! Built-in audit rules.
//!
//! Every rule is bound to one `CheckId` and hands the evaluator either a
//! workload check or a container check. Rules only judge the single target
//! they are given; walking workloads and container categories is the
//! evaluator's job, so a container rule behaves identically for primary,
//! init and ephemeral containers.

pub mod capabilities;
pub mod hostnamespace;
pub mod ports;
pub mod privileged;
pub mod privilegeescalation;

use crate::analyzer::context::object::{ContainerSpec, Workload};
use crate::analyzer::types::{CheckId, CheckScope, Finding, WorkloadRef};

/// A check evaluated once per workload.
pub trait WorkloadCheck: Send + Sync {
    /// Return the finding for this workload, if it matches.
    fn inspect_workload(&self, workload: &Workload) -> Option<Finding>;
}

/// A check evaluated once per container.
pub trait ContainerCheck: Send + Sync {
    /// Return every finding for this container.
    fn inspect_container(&self, owner: &WorkloadRef, container: &ContainerSpec) -> Vec<Finding>;
}

/// The check function a rule provides.
pub enum CheckFunc<'a> {
    Workload(&'a dyn WorkloadCheck),
    Container(&'a dyn ContainerCheck),
}

impl CheckFunc<'_> {
    pub fn scope(&self) -> CheckScope {
        match self {
            Self::Workload(_) => CheckScope::Workload,
            Self::Container(_) => CheckScope::Container,
        }
    }
}

/// A named audit rule.
pub trait Rule: Send + Sync {
    /// The check this rule implements.
    fn id(&self) -> CheckId;

    /// Get the human-readable name.
    fn human_name(&self) -> &'static str;

    /// Get the rule description.
    fn description(&self) -> &'static str;

    /// Get the check function.
    fn func(&self) -> CheckFunc<'_>;
}

/// Look up the rule implementing a check.
pub fn rule(check: CheckId) -> &'static dyn Rule {
    match check {
        CheckId::HostNetwork => &hostnamespace::HostNetworkRule,
        CheckId::HostPid => &hostnamespace::HostPidRule,
        CheckId::HostIpc => &hostnamespace::HostIpcRule,
        CheckId::AllowPrivilegeEscalation => &privilegeescalation::PrivilegeEscalationRule,
        CheckId::Privileged => &privileged::PrivilegedRule,
        CheckId::CapabilitiesAdded => &capabilities::CapabilitiesAddedRule,
        CheckId::CapabilitiesDropped => &capabilities::CapabilitiesDroppedRule,
        CheckId::HostPorts => &ports::HostPortsRule,
    }
}

/// All rules, in `CheckId::ALL` order.
pub fn rules() -> impl Iterator<Item = &'static dyn Rule> {
    CheckId::ALL.into_iter().map(rule)
}

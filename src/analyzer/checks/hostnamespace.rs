//! Host network/PID/IPC sharing rules.

use crate::analyzer::checks::{CheckFunc, Rule, WorkloadCheck};
use crate::analyzer::context::object::Workload;
use crate::analyzer::types::{CheckId, Finding};

/// Detects workloads using the host network namespace.
pub struct HostNetworkRule;

impl Rule for HostNetworkRule {
    fn id(&self) -> CheckId {
        CheckId::HostNetwork
    }

    fn human_name(&self) -> &'static str {
        "Host Network"
    }

    fn description(&self) -> &'static str {
        "Detects pods using the host network namespace"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Workload(self)
    }
}

impl WorkloadCheck for HostNetworkRule {
    fn inspect_workload(&self, workload: &Workload) -> Option<Finding> {
        workload
            .host_network
            .then(|| Finding::HostNetwork(workload.reference()))
    }
}

/// Detects workloads using the host PID namespace.
pub struct HostPidRule;

impl Rule for HostPidRule {
    fn id(&self) -> CheckId {
        CheckId::HostPid
    }

    fn human_name(&self) -> &'static str {
        "Host PID"
    }

    fn description(&self) -> &'static str {
        "Detects pods using the host PID namespace"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Workload(self)
    }
}

impl WorkloadCheck for HostPidRule {
    fn inspect_workload(&self, workload: &Workload) -> Option<Finding> {
        workload
            .host_pid
            .then(|| Finding::HostPid(workload.reference()))
    }
}

/// Detects workloads using the host IPC namespace.
pub struct HostIpcRule;

impl Rule for HostIpcRule {
    fn id(&self) -> CheckId {
        CheckId::HostIpc
    }

    fn human_name(&self) -> &'static str {
        "Host IPC"
    }

    fn description(&self) -> &'static str {
        "Detects pods using the host IPC namespace"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Workload(self)
    }
}

impl WorkloadCheck for HostIpcRule {
    fn inspect_workload(&self, workload: &Workload) -> Option<Finding> {
        workload
            .host_ipc
            .then(|| Finding::HostIpc(workload.reference()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::types::WorkloadRef;

    #[test]
    fn test_host_network_detected() {
        let w = Workload::new("kube-system", "proxy").with_host_network(true);
        assert_eq!(
            HostNetworkRule.inspect_workload(&w),
            Some(Finding::HostNetwork(WorkloadRef::new("kube-system", "proxy")))
        );
    }

    #[test]
    fn test_flags_are_independent() {
        let w = Workload::new("ns", "app").with_host_pid(true);
        assert!(HostNetworkRule.inspect_workload(&w).is_none());
        assert!(HostIpcRule.inspect_workload(&w).is_none());
        assert_eq!(
            HostPidRule.inspect_workload(&w),
            Some(Finding::HostPid(WorkloadRef::new("ns", "app")))
        );
    }

    #[test]
    fn test_host_ipc_detected() {
        let w = Workload::new("ns", "ipc").with_host_ipc(true);
        assert_eq!(
            HostIpcRule.inspect_workload(&w).map(|f| f.check()),
            Some(CheckId::HostIpc)
        );
    }

    #[test]
    fn test_isolated_workload_ok() {
        let w = Workload::new("ns", "app");
        assert!(HostNetworkRule.inspect_workload(&w).is_none());
        assert!(HostPidRule.inspect_workload(&w).is_none());
        assert!(HostIpcRule.inspect_workload(&w).is_none());
    }
}

//! Host port rule.

use crate::analyzer::checks::{CheckFunc, ContainerCheck, Rule};
use crate::analyzer::context::object::ContainerSpec;
use crate::analyzer::types::{CheckId, ContainerRef, Finding, WorkloadRef};

/// Detects container ports bound on the host.
pub struct HostPortsRule;

impl Rule for HostPortsRule {
    fn id(&self) -> CheckId {
        CheckId::HostPorts
    }

    fn human_name(&self) -> &'static str {
        "Host Ports"
    }

    fn description(&self) -> &'static str {
        "Detects containers binding ports on the host network interface"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Container(self)
    }
}

impl ContainerCheck for HostPortsRule {
    fn inspect_container(&self, owner: &WorkloadRef, container: &ContainerSpec) -> Vec<Finding> {
        container
            .ports
            .iter()
            .flatten()
            .filter_map(|port| port.bound_host_port())
            .map(|host_port| Finding::HostPort {
                container: ContainerRef::new(owner, &container.name),
                host_port,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::context::object::ContainerPort;

    fn owner() -> WorkloadRef {
        WorkloadRef::new("ns", "app")
    }

    #[test]
    fn test_zero_host_port_skipped() {
        let c = ContainerSpec::new("web")
            .with_port(ContainerPort::new(80).with_host_port(0))
            .with_port(ContainerPort::new(8080).with_host_port(8080));

        assert_eq!(
            HostPortsRule.inspect_container(&owner(), &c),
            vec![Finding::HostPort {
                container: ContainerRef::new(&owner(), "web"),
                host_port: 8080,
            }]
        );
    }

    #[test]
    fn test_one_finding_per_bound_port() {
        let c = ContainerSpec::new("dns")
            .with_port(ContainerPort::new(53).with_host_port(53))
            .with_port(ContainerPort::new(9153))
            .with_port(ContainerPort::new(8053).with_host_port(8053));

        let ports: Vec<_> = HostPortsRule
            .inspect_container(&owner(), &c)
            .iter()
            .filter_map(Finding::host_port)
            .collect();
        assert_eq!(ports, vec![53, 8053]);
    }

    #[test]
    fn test_no_ports_ok() {
        assert!(
            HostPortsRule
                .inspect_container(&owner(), &ContainerSpec::new("web"))
                .is_empty()
        );
    }
}

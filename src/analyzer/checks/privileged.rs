//! Privileged container rule.

use crate::analyzer::checks::{CheckFunc, ContainerCheck, Rule};
use crate::analyzer::context::object::ContainerSpec;
use crate::analyzer::types::{CheckId, ContainerRef, Finding, WorkloadRef};

/// Detects containers running in privileged mode.
pub struct PrivilegedRule;

impl Rule for PrivilegedRule {
    fn id(&self) -> CheckId {
        CheckId::Privileged
    }

    fn human_name(&self) -> &'static str {
        "Privileged Container"
    }

    fn description(&self) -> &'static str {
        "Detects containers running in privileged mode"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Container(self)
    }
}

impl ContainerCheck for PrivilegedRule {
    fn inspect_container(&self, owner: &WorkloadRef, container: &ContainerSpec) -> Vec<Finding> {
        let privileged = container
            .security_context
            .as_ref()
            .and_then(|sc| sc.privileged)
            .unwrap_or(false);

        if privileged {
            vec![Finding::Privileged(ContainerRef::new(owner, &container.name))]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::context::object::SecurityContext;

    fn owner() -> WorkloadRef {
        WorkloadRef::new("ns", "app")
    }

    #[test]
    fn test_privileged_container_detected() {
        let c = ContainerSpec::new("web")
            .with_security_context(SecurityContext::default().with_privileged(true));
        assert_eq!(
            PrivilegedRule.inspect_container(&owner(), &c),
            vec![Finding::Privileged(ContainerRef::new(&owner(), "web"))]
        );
    }

    #[test]
    fn test_non_privileged_container_ok() {
        let explicit = ContainerSpec::new("web")
            .with_security_context(SecurityContext::default().with_privileged(false));
        let unset = ContainerSpec::new("web").with_security_context(SecurityContext::default());
        let bare = ContainerSpec::new("web");

        for c in [explicit, unset, bare] {
            assert!(PrivilegedRule.inspect_container(&owner(), &c).is_empty());
        }
    }
}

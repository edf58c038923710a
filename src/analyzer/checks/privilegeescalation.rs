//! Privilege escalation rule.

use crate::analyzer::checks::{CheckFunc, ContainerCheck, Rule};
use crate::analyzer::context::object::ContainerSpec;
use crate::analyzer::types::{CheckId, ContainerRef, Finding, WorkloadRef};

/// Detects containers that do not block privilege escalation.
pub struct PrivilegeEscalationRule;

impl Rule for PrivilegeEscalationRule {
    fn id(&self) -> CheckId {
        CheckId::AllowPrivilegeEscalation
    }

    fn human_name(&self) -> &'static str {
        "Privilege Escalation"
    }

    fn description(&self) -> &'static str {
        "Detects containers that do not set allowPrivilegeEscalation to false"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Container(self)
    }
}

impl ContainerCheck for PrivilegeEscalationRule {
    fn inspect_container(&self, owner: &WorkloadRef, container: &ContainerSpec) -> Vec<Finding> {
        let blocked = match &container.security_context {
            None => false,
            Some(sc) => match sc.allow_privilege_escalation {
                Some(false) => true,
                // An explicit `true` is reported the same as leaving the default.
                Some(true) | None => false,
            },
        };

        if blocked {
            Vec::new()
        } else {
            vec![Finding::AllowPrivilegeEscalation(ContainerRef::new(
                owner,
                &container.name,
            ))]
        }
    }
}

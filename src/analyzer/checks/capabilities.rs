//! Linux capabilities rules.

use crate::analyzer::checks::{CheckFunc, ContainerCheck, Rule};
use crate::analyzer::context::object::{Capabilities, ContainerSpec};
use crate::analyzer::types::{CheckId, ContainerRef, Finding, WorkloadRef};

/// Detects containers that add Linux capabilities.
pub struct CapabilitiesAddedRule;

impl Rule for CapabilitiesAddedRule {
    fn id(&self) -> CheckId {
        CheckId::CapabilitiesAdded
    }

    fn human_name(&self) -> &'static str {
        "Added Capabilities"
    }

    fn description(&self) -> &'static str {
        "Detects containers that add Linux capabilities"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Container(self)
    }
}

impl ContainerCheck for CapabilitiesAddedRule {
    fn inspect_container(&self, owner: &WorkloadRef, container: &ContainerSpec) -> Vec<Finding> {
        requested(container, |caps| caps.add.as_deref())
            .map(|names| Finding::CapabilitiesAdded {
                container: ContainerRef::new(owner, &container.name),
                capabilities: names.to_vec(),
            })
            .into_iter()
            .collect()
    }
}

/// Detects containers that drop Linux capabilities.
pub struct CapabilitiesDroppedRule;

impl Rule for CapabilitiesDroppedRule {
    fn id(&self) -> CheckId {
        CheckId::CapabilitiesDropped
    }

    fn human_name(&self) -> &'static str {
        "Dropped Capabilities"
    }

    fn description(&self) -> &'static str {
        "Detects containers that drop Linux capabilities"
    }

    fn func(&self) -> CheckFunc<'_> {
        CheckFunc::Container(self)
    }
}

impl ContainerCheck for CapabilitiesDroppedRule {
    fn inspect_container(&self, owner: &WorkloadRef, container: &ContainerSpec) -> Vec<Finding> {
        requested(container, |caps| caps.drop.as_deref())
            .map(|names| Finding::CapabilitiesDropped {
                container: ContainerRef::new(owner, &container.name),
                capabilities: names.to_vec(),
            })
            .into_iter()
            .collect()
    }
}

/// The selected capability list, when the container declares a non-empty one.
fn requested<'a>(
    container: &'a ContainerSpec,
    select: impl Fn(&'a Capabilities) -> Option<&'a [String]>,
) -> Option<&'a [String]> {
    container
        .security_context
        .as_ref()
        .and_then(|sc| sc.capabilities.as_ref())
        .and_then(select)
        .filter(|names| !names.is_empty())
}

//! Container traversal utilities.

use crate::analyzer::context::object::{ContainerSpec, Workload};
use crate::analyzer::types::{CONTAINER_CATEGORIES, ContainerCategory};

/// Every container of a workload tagged with its category.
///
/// Primary containers come first, then init, then ephemeral; within a
/// category, declaration order is kept.
pub fn all_containers(
    workload: &Workload,
) -> impl Iterator<Item = (ContainerCategory, &ContainerSpec)> {
    CONTAINER_CATEGORIES.into_iter().flat_map(move |category| {
        workload
            .containers_of(category)
            .iter()
            .map(move |container| (category, container))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_order() {
        let w = Workload::new("ns", "app")
            .with_container(ContainerCategory::Ephemeral, ContainerSpec::new("debug"))
            .with_container(ContainerCategory::Init, ContainerSpec::new("setup"))
            .with_container(ContainerCategory::Primary, ContainerSpec::new("web"))
            .with_container(ContainerCategory::Primary, ContainerSpec::new("sidecar"));

        let order: Vec<_> = all_containers(&w)
            .map(|(category, c)| (category, c.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (ContainerCategory::Primary, "web"),
                (ContainerCategory::Primary, "sidecar"),
                (ContainerCategory::Init, "setup"),
                (ContainerCategory::Ephemeral, "debug"),
            ]
        );
    }
}

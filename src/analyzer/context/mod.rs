//! Audit context for a cluster snapshot.
//!
//! A snapshot holds every workload fetched in one provider call and is
//! read-only for the duration of an evaluation pass.

pub mod object;

pub use object::{Capabilities, ContainerPort, ContainerSpec, SecurityContext, Workload};

/// Immutable list of workloads captured from the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    workloads: Vec<Workload>,
}

impl Snapshot {
    /// Create a snapshot from workloads in iteration order.
    pub fn new(workloads: Vec<Workload>) -> Self {
        Self { workloads }
    }

    /// All workloads, in the order the provider returned them.
    pub fn workloads(&self) -> &[Workload] {
        &self.workloads
    }

    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }
}

impl From<Vec<Workload>> for Snapshot {
    fn from(workloads: Vec<Workload>) -> Self {
        Self::new(workloads)
    }
}

impl FromIterator<Workload> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Workload>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//! Extraction utilities for Kubernetes objects.
//!
//! These helpers turn API objects into audit workloads and walk their
//! containers in a fixed order.

pub mod container;
pub mod pod;

pub use container::all_containers;
pub use pod::workload_from_pod;

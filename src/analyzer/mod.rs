//! Workload security audit engine.
//!
//! Walks a snapshot of pod specifications and applies a fixed set of
//! independent rules to each workload or to each of its containers.
//!
//! # Example
//!
//! ```rust
//! use podsec_audit::analyzer::context::object::*;
//! use podsec_audit::analyzer::{evaluate, CheckId, ContainerCategory, Snapshot};
//!
//! let snapshot = Snapshot::new(vec![
//!     Workload::new("shop", "web").with_container(
//!         ContainerCategory::Primary,
//!         ContainerSpec::new("nginx")
//!             .with_security_context(SecurityContext::default().with_privileged(true)),
//!     ),
//! ]);
//!
//! let findings = evaluate(&snapshot, CheckId::Privileged);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].container(), Some("nginx"));
//! ```
//!
//! # Checks
//!
//! ## Workload checks
//! - Host network, PID and IPC namespace sharing
//!
//! ## Container checks
//! Applied identically to primary, init and ephemeral containers:
//! - Privilege escalation not blocked
//! - Privileged mode
//! - Added and dropped Linux capabilities
//! - Ports bound on the host

pub mod checks;
pub mod context;
pub mod evaluate;
pub mod extract;
pub mod formatter;
pub mod types;

pub use context::Snapshot;
pub use evaluate::{CheckRun, evaluate, evaluate_all};
pub use formatter::{OutputFormat, format_findings, format_runs};
pub use types::{CONTAINER_CATEGORIES, CheckId, CheckScope, ContainerCategory, Finding};

//! Evaluation of checks against a workload snapshot.
//!
//! Each call is one complete pass of one check over the snapshot. Passes are
//! independent and keep no state, so running the same check twice against the
//! same snapshot yields the same findings in the same order.

use crate::analyzer::checks::{self, CheckFunc};
use crate::analyzer::context::Snapshot;
use crate::analyzer::extract;
use crate::analyzer::types::{CheckId, Finding};
use serde::Serialize;

/// Findings of one check pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRun {
    /// The check that was run.
    pub check: CheckId,
    /// Findings in traversal order.
    pub findings: Vec<Finding>,
}

/// Run a single check over every workload in the snapshot.
///
/// Workload checks yield at most one finding per workload. Container checks
/// visit primary, then init, then ephemeral containers of each workload.
pub fn evaluate(snapshot: &Snapshot, check: CheckId) -> Vec<Finding> {
    let rule = checks::rule(check);
    let mut findings = Vec::new();

    match rule.func() {
        CheckFunc::Workload(func) => {
            for workload in snapshot.workloads() {
                findings.extend(func.inspect_workload(workload));
            }
        }
        CheckFunc::Container(func) => {
            for workload in snapshot.workloads() {
                let owner = workload.reference();
                for (category, container) in extract::all_containers(workload) {
                    let matched = func.inspect_container(&owner, container);
                    if !matched.is_empty() {
                        log::trace!(
                            "{}: {} '{}' in {} matched {} time(s)",
                            check,
                            category,
                            container.name,
                            owner,
                            matched.len()
                        );
                    }
                    findings.extend(matched);
                }
            }
        }
    }

    log::debug!(
        "{} check inspected {} workload(s), {} finding(s)",
        check,
        snapshot.len(),
        findings.len()
    );

    findings
}

/// Run every check as its own pass, in `CheckId::ALL` order.
pub fn evaluate_all(snapshot: &Snapshot) -> Vec<CheckRun> {
    CheckId::ALL
        .into_iter()
        .map(|check| CheckRun {
            check,
            findings: evaluate(snapshot, check),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::context::object::*;
    use crate::analyzer::types::{ContainerCategory, ContainerRef, WorkloadRef};

    fn app() -> WorkloadRef {
        WorkloadRef::new("ns", "app")
    }

    /// `ns/app`: privileged primary `web`, init `init` without a security context.
    fn scenario() -> Snapshot {
        Snapshot::new(vec![
            Workload::new("ns", "app")
                .with_container(
                    ContainerCategory::Primary,
                    ContainerSpec::new("web")
                        .with_security_context(SecurityContext::default().with_privileged(true)),
                )
                .with_container(ContainerCategory::Init, ContainerSpec::new("init")),
        ])
    }

    #[test]
    fn test_privileged_only_flags_web() {
        assert_eq!(
            evaluate(&scenario(), CheckId::Privileged),
            vec![Finding::Privileged(ContainerRef::new(&app(), "web"))]
        );
    }

    #[test]
    fn test_privilege_escalation_flags_both() {
        assert_eq!(
            evaluate(&scenario(), CheckId::AllowPrivilegeEscalation),
            vec![
                Finding::AllowPrivilegeEscalation(ContainerRef::new(&app(), "web")),
                Finding::AllowPrivilegeEscalation(ContainerRef::new(&app(), "init")),
            ]
        );
    }

    #[test]
    fn test_container_categories_visited_in_order() {
        let hardened = || {
            SecurityContext::default()
                .with_allow_privilege_escalation(false)
                .with_privileged(true)
        };
        let snapshot = Snapshot::new(vec![
            Workload::new("ns", "a")
                .with_container(
                    ContainerCategory::Ephemeral,
                    ContainerSpec::new("eph").with_security_context(hardened()),
                )
                .with_container(
                    ContainerCategory::Init,
                    ContainerSpec::new("init").with_security_context(hardened()),
                )
                .with_container(
                    ContainerCategory::Primary,
                    ContainerSpec::new("main").with_security_context(hardened()),
                ),
            Workload::new("ns", "b").with_container(
                ContainerCategory::Primary,
                ContainerSpec::new("other").with_security_context(hardened()),
            ),
        ]);

        let names: Vec<_> = evaluate(&snapshot, CheckId::Privileged)
            .iter()
            .map(|f| format!("{}/{}", f.workload().name, f.container().unwrap()))
            .collect();
        assert_eq!(names, vec!["a/main", "a/init", "a/eph", "b/other"]);
        assert!(evaluate(&snapshot, CheckId::AllowPrivilegeEscalation).is_empty());
    }

    #[test]
    fn test_workload_check_once_per_workload() {
        let snapshot = Snapshot::new(vec![
            Workload::new("ns", "a")
                .with_host_network(true)
                .with_container(ContainerCategory::Primary, ContainerSpec::new("x"))
                .with_container(ContainerCategory::Primary, ContainerSpec::new("y")),
            Workload::new("ns", "b"),
            Workload::new("other", "c").with_host_network(true),
        ]);

        assert_eq!(
            evaluate(&snapshot, CheckId::HostNetwork),
            vec![
                Finding::HostNetwork(WorkloadRef::new("ns", "a")),
                Finding::HostNetwork(WorkloadRef::new("other", "c")),
            ]
        );
        assert!(evaluate(&snapshot, CheckId::HostPid).is_empty());
    }

    #[test]
    fn test_host_port_scenario() {
        let snapshot = Snapshot::new(vec![Workload::new("ns", "app").with_container(
            ContainerCategory::Primary,
            ContainerSpec::new("web")
                .with_port(ContainerPort::new(80).with_host_port(0))
                .with_port(ContainerPort::new(8080).with_host_port(8080)),
        )]);

        assert_eq!(
            evaluate(&snapshot, CheckId::HostPorts),
            vec![Finding::HostPort {
                container: ContainerRef::new(&app(), "web"),
                host_port: 8080,
            }]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        for check in CheckId::ALL {
            assert!(evaluate(&snapshot, check).is_empty());
        }
    }

    #[test]
    fn test_evaluate_all_runs_each_check_independently() {
        let snapshot = scenario();
        let runs = evaluate_all(&snapshot);

        assert_eq!(runs.len(), CheckId::ALL.len());
        for run in &runs {
            assert_eq!(run.findings, evaluate(&snapshot, run.check));
            assert!(run.findings.iter().all(|f| f.check() == run.check));
        }
    }
}

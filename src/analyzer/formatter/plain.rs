//! Plain text formatter.

use crate::analyzer::checks;
use crate::analyzer::evaluate::CheckRun;
use crate::analyzer::types::Finding;

/// Notice printed when a check produced nothing.
pub const NO_FINDINGS: &str = "No findings!";

/// Format findings as plain text.
///
/// The header names the check of the first finding; every finding of one
/// evaluation pass shares that check.
pub fn format(findings: &[Finding]) -> String {
    let Some(first) = findings.first() else {
        return format!("{}\n", NO_FINDINGS);
    };

    let mut output = format!("Findings for the {} check\n", first.check().label());
    for finding in findings {
        output.push_str(&format_line(finding));
        output.push('\n');
    }
    output
}

/// Format a single finding according to its shape.
pub fn format_line(finding: &Finding) -> String {
    match finding {
        Finding::HostNetwork(w) | Finding::HostPid(w) | Finding::HostIpc(w) => {
            format!("namespace {} : pod {}", w.namespace, w.name)
        }
        Finding::AllowPrivilegeEscalation(c) | Finding::Privileged(c) => format!(
            "namespace {} : pod {} : container {}",
            c.workload.namespace, c.workload.name, c.container
        ),
        Finding::CapabilitiesAdded {
            container: c,
            capabilities,
        } => format!(
            "namespace {} : pod {} : container {} added {} capabilities",
            c.workload.namespace,
            c.workload.name,
            c.container,
            capabilities.join(",")
        ),
        Finding::CapabilitiesDropped {
            container: c,
            capabilities,
        } => format!(
            "namespace {} : pod {} : container {} dropped {} capabilities",
            c.workload.namespace,
            c.workload.name,
            c.container,
            capabilities.join(",")
        ),
        Finding::HostPort {
            container: c,
            host_port,
        } => format!(
            "namespace {} : pod {} : container {} : port {}",
            c.workload.namespace, c.workload.name, c.container, host_port
        ),
    }
}

/// Format a multi-check run, one banner per check.
pub fn format_runs(runs: &[CheckRun]) -> String {
    let mut output = String::new();

    for (i, run) in runs.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("# {}\n", checks::rule(run.check).human_name()));
        output.push_str(&format(&run.findings));
    }

    let total: usize = runs.iter().map(|r| r.findings.len()).sum();
    output.push_str(&format!(
        "\nFound {} finding(s) across {} check(s).\n",
        total,
        runs.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::types::{CheckId, ContainerRef, WorkloadRef};

    fn web() -> ContainerRef {
        ContainerRef::new(&WorkloadRef::new("ns", "app"), "web")
    }

    #[test]
    fn test_empty_findings() {
        assert_eq!(format(&[]), "No findings!\n");
    }

    #[test]
    fn test_header_and_lines() {
        let findings = vec![
            Finding::Privileged(web()),
            Finding::Privileged(ContainerRef::new(&WorkloadRef::new("ns", "app"), "init")),
        ];
        assert_eq!(
            format(&findings),
            "Findings for the privileged check\n\
             namespace ns : pod app : container web\n\
             namespace ns : pod app : container init\n"
        );
    }

    #[test]
    fn test_header_uses_report_label() {
        let added = Finding::CapabilitiesAdded {
            container: web(),
            capabilities: vec!["NET_ADMIN".to_string()],
        };
        let dropped = Finding::CapabilitiesDropped {
            container: web(),
            capabilities: vec!["ALL".to_string()],
        };
        let port = Finding::HostPort {
            container: web(),
            host_port: 8080,
        };

        assert!(format(&[added]).starts_with("Findings for the Added Capabilities check\n"));
        assert!(format(&[dropped]).starts_with("Findings for the Dropped Capabilities check\n"));
        assert!(format(&[port]).starts_with("Findings for the Host Ports check\n"));
        assert!(
            format(&[Finding::HostIpc(WorkloadRef::new("ns", "app"))])
                .starts_with("Findings for the hostipc check\n")
        );
    }

    #[test]
    fn test_line_shapes() {
        assert_eq!(
            format_line(&Finding::HostIpc(WorkloadRef::new("ns", "app"))),
            "namespace ns : pod app"
        );
        assert_eq!(
            format_line(&Finding::CapabilitiesAdded {
                container: web(),
                capabilities: vec!["NET_ADMIN".to_string(), "SYS_TIME".to_string()],
            }),
            "namespace ns : pod app : container web added NET_ADMIN,SYS_TIME capabilities"
        );
        assert_eq!(
            format_line(&Finding::CapabilitiesDropped {
                container: web(),
                capabilities: vec!["ALL".to_string()],
            }),
            "namespace ns : pod app : container web dropped ALL capabilities"
        );
        assert_eq!(
            format_line(&Finding::HostPort {
                container: web(),
                host_port: 8080,
            }),
            "namespace ns : pod app : container web : port 8080"
        );
    }

    #[test]
    fn test_format_runs() {
        let runs = vec![
            CheckRun {
                check: CheckId::HostNetwork,
                findings: vec![Finding::HostNetwork(WorkloadRef::new("ns", "app"))],
            },
            CheckRun {
                check: CheckId::HostPid,
                findings: Vec::new(),
            },
        ];
        let output = format_runs(&runs);
        assert!(output.starts_with("# Host Network\nFindings for the hostnet check\n"));
        assert!(output.contains("# Host PID\nNo findings!\n"));
        assert!(output.ends_with("Found 1 finding(s) across 2 check(s).\n"));
    }
}

use crate::{
    analyzer::{self, CheckId, OutputFormat, Snapshot},
    cli::Cli,
    cluster::{KubeSource, ListScope, ManifestSource, WorkloadSource},
    config::types::Config,
};
use std::path::PathBuf;

/// Settings for one audit run, merged from CLI flags and the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditOptions {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub namespace: Option<String>,
    pub from_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub fail_on_findings: bool,
}

impl AuditOptions {
    /// CLI flags win over the config file, which wins over defaults.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            kubeconfig: cli.kubeconfig.clone().or_else(|| config.kubeconfig.clone()),
            context: cli.context.clone().or_else(|| config.context.clone()),
            namespace: cli.namespace.clone().or_else(|| config.namespace.clone()),
            from_file: cli.from_file.clone(),
            format: if cli.json {
                OutputFormat::Json
            } else {
                config.output.format
            },
            fail_on_findings: cli.fail_on_findings || config.output.fail_on_findings,
        }
    }
}

/// Fetch the workload snapshot from the configured source.
pub async fn fetch_snapshot(options: &AuditOptions) -> crate::Result<Snapshot> {
    let scope = ListScope::from(options.namespace.clone());

    let snapshot = match &options.from_file {
        Some(path) => ManifestSource::new(path).list_workloads(&scope).await?,
        None => {
            let source =
                KubeSource::connect(options.kubeconfig.as_deref(), options.context.as_deref())
                    .await?;
            source.list_workloads(&scope).await?
        }
    };

    log::info!("Auditing {} workload(s)", snapshot.len());
    Ok(snapshot)
}

/// Run one check and print its report. Returns the number of findings.
pub async fn handle_check(check: CheckId, options: &AuditOptions) -> crate::Result<usize> {
    let snapshot = fetch_snapshot(options).await?;
    let (output, count) = render_check(&snapshot, check, options.format)?;
    print!("{}", output);
    Ok(count)
}

/// Run every check and print the combined report. Returns the number of findings.
pub async fn handle_all(options: &AuditOptions) -> crate::Result<usize> {
    let snapshot = fetch_snapshot(options).await?;
    let (output, count) = render_all(&snapshot, options.format)?;
    print!("{}", output);
    Ok(count)
}

fn render_check(
    snapshot: &Snapshot,
    check: CheckId,
    format: OutputFormat,
) -> crate::Result<(String, usize)> {
    let findings = analyzer::evaluate(snapshot, check);
    let mut output = analyzer::format_findings(&findings, format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok((output, findings.len()))
}

fn render_all(snapshot: &Snapshot, format: OutputFormat) -> crate::Result<(String, usize)> {
    let runs = analyzer::evaluate_all(snapshot);
    let count = runs.iter().map(|r| r.findings.len()).sum();
    let mut output = analyzer::format_runs(&runs, format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok((output, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ContainerCategory;
    use crate::analyzer::context::object::*;
    use clap::Parser;

    fn snapshot() -> Snapshot {
        Snapshot::new(vec![
            Workload::new("ns", "app")
                .with_host_pid(true)
                .with_container(ContainerCategory::Primary, ContainerSpec::new("web")),
        ])
    }

    #[test]
    fn test_resolve_prefers_cli() {
        let cli = Cli::try_parse_from(["podsec", "hostnet", "-n", "cli-ns", "--json"]).unwrap();
        let mut config = Config::default();
        config.namespace = Some("file-ns".to_string());
        config.context = Some("prod".to_string());

        let options = AuditOptions::resolve(&cli, &config);
        assert_eq!(options.namespace.as_deref(), Some("cli-ns"));
        assert_eq!(options.context.as_deref(), Some("prod"));
        assert_eq!(options.format, OutputFormat::Json);
        assert!(!options.fail_on_findings);
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let cli = Cli::try_parse_from(["podsec", "hostnet"]).unwrap();
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.fail_on_findings = true;

        let options = AuditOptions::resolve(&cli, &config);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.fail_on_findings);
        assert!(options.kubeconfig.is_none());
    }

    #[test]
    fn test_render_check_text() {
        let (output, count) =
            render_check(&snapshot(), CheckId::HostPid, OutputFormat::Plain).unwrap();
        assert_eq!(count, 1);
        assert_eq!(output, "Findings for the hostpid check\nnamespace ns : pod app\n");

        let (output, count) =
            render_check(&snapshot(), CheckId::Privileged, OutputFormat::Plain).unwrap();
        assert_eq!(count, 0);
        assert_eq!(output, "No findings!\n");
    }

    #[test]
    fn test_render_check_json_empty() {
        let (output, count) =
            render_check(&snapshot(), CheckId::HostIpc, OutputFormat::Json).unwrap();
        assert_eq!(count, 0);
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn test_render_all_counts_every_pass() {
        let (_, count) = render_all(&snapshot(), OutputFormat::Json).unwrap();
        // hostpid on the pod, allowprivesc on `web`
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_fetch_snapshot_missing_file() {
        let options = AuditOptions {
            from_file: Some(PathBuf::from("/no/such/pods.yaml")),
            ..Default::default()
        };
        let err = fetch_snapshot(&options).await.unwrap_err();
        assert!(matches!(err, crate::AuditError::Cluster(_)));
    }
}

use crate::analyzer::CheckId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "podsec")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit running Kubernetes workloads for security misconfigurations")]
#[command(long_about = "Lists the pods of a cluster and reports host namespace sharing, privilege escalation, privileged containers, Linux capability changes and host port bindings. Every check covers primary, init and ephemeral containers alike.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the kubeconfig used to reach the cluster
    #[arg(short, long, global = true, value_name = "FILE")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true, value_name = "NAME")]
    pub context: Option<String>,

    /// Only audit pods in this namespace (default: all namespaces)
    #[arg(short, long, global = true, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Audit a saved pod listing (`kubectl get pods -A -o yaml`) instead of a live cluster
    #[arg(long, global = true, value_name = "FILE", conflicts_with_all = ["kubeconfig", "context"])]
    pub from_file: Option<PathBuf>,

    /// Output findings in JSON format
    #[arg(long, global = true, visible_alias = "jsonrep")]
    pub json: bool,

    /// Exit with status 2 when any finding is reported
    #[arg(long, global = true)]
    pub fail_on_findings: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Pods using the host network namespace
    #[command(visible_alias = "host-network")]
    Hostnet,

    /// Pods using the host PID namespace
    #[command(visible_alias = "host-pid")]
    Hostpid,

    /// Pods using the host IPC namespace
    #[command(visible_alias = "host-ipc")]
    Hostipc,

    /// Containers that do not block privilege escalation
    #[command(visible_alias = "privilege-escalation")]
    Allowprivesc,

    /// Containers running in privileged mode
    Privileged,

    /// Containers adding Linux capabilities
    #[command(visible_alias = "added-capabilities")]
    Addedcapabilities,

    /// Containers dropping Linux capabilities
    #[command(visible_alias = "dropped-capabilities")]
    Droppedcapabilities,

    /// Container ports bound on the host
    #[command(visible_alias = "host-ports")]
    Hostports,

    /// Run every check, one pass each
    All,

    /// Show the available checks
    ListChecks,
}

impl Commands {
    /// The single check this command selects, if any.
    pub fn check(&self) -> Option<CheckId> {
        match self {
            Self::Hostnet => Some(CheckId::HostNetwork),
            Self::Hostpid => Some(CheckId::HostPid),
            Self::Hostipc => Some(CheckId::HostIpc),
            Self::Allowprivesc => Some(CheckId::AllowPrivilegeEscalation),
            Self::Privileged => Some(CheckId::Privileged),
            Self::Addedcapabilities => Some(CheckId::CapabilitiesAdded),
            Self::Droppedcapabilities => Some(CheckId::CapabilitiesDropped),
            Self::Hostports => Some(CheckId::HostPorts),
            Self::All | Self::ListChecks => None,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

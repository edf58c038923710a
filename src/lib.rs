//! # podsec
//!
//! Audits the workloads running in a Kubernetes cluster for a fixed set of
//! security misconfigurations and reports every offending pod or container.
//!
//! ## Checks
//!
//! - **Host namespaces**: pods sharing the host network, PID or IPC namespace
//! - **Privilege escalation**: containers that do not block it
//! - **Privileged**: containers running in privileged mode
//! - **Capabilities**: containers adding or dropping Linux capabilities
//! - **Host ports**: container ports bound on the host
//!
//! Container checks cover primary, init and ephemeral containers alike.
//!
//! ## Example
//!
//! ```rust,no_run
//! use podsec_audit::analyzer::{CheckId, OutputFormat, evaluate, format_findings};
//! use podsec_audit::cluster::{ListScope, ManifestSource, WorkloadSource};
//!
//! # async fn run() -> podsec_audit::Result<()> {
//! let source = ManifestSource::new("pods.yaml");
//! let snapshot = source.list_workloads(&ListScope::AllNamespaces).await?;
//! let findings = evaluate(&snapshot, CheckId::Privileged);
//! print!("{}", format_findings(&findings, OutputFormat::Plain)?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::{CheckId, Finding, Snapshot, evaluate};
pub use error::{AuditError, Result};
use cli::{Cli, Commands};
use config::types::Config;
use handlers::AuditOptions;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of a completed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Number of findings reported.
    pub findings: usize,
    /// Whether findings should turn into a failing exit status.
    pub fail_on_findings: bool,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.fail_on_findings && self.findings > 0 {
            2
        } else {
            0
        }
    }
}

pub async fn run_command(cli: &Cli, config: &Config) -> Result<Outcome> {
    let options = AuditOptions::resolve(cli, config);

    let findings = match cli.command {
        Commands::ListChecks => {
            handlers::handle_list_checks(options.format)?;
            0
        }
        Commands::All => handlers::handle_all(&options).await?,
        command => match command.check() {
            Some(check) => handlers::handle_check(check, &options).await?,
            None => 0,
        },
    };

    Ok(Outcome {
        findings,
        fail_on_findings: options.fail_on_findings,
    })
}

use clap::Parser;
use colored::Colorize;
use podsec_audit::{cli::Cli, config, run_command};
use std::io::Write;
use std::process;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => {
            let _ = std::io::stdout().flush();
            process::exit(code);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn run() -> podsec_audit::Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    // Execute command
    let outcome = run_command(&cli, &config).await?;
    log::debug!("Reported {} finding(s)", outcome.findings);

    Ok(outcome.exit_code())
}

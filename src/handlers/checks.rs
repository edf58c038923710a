use crate::analyzer::{OutputFormat, checks};
use colored::*;
use serde::Serialize;

#[derive(Serialize)]
struct CheckEntry {
    id: &'static str,
    name: &'static str,
    scope: &'static str,
    description: &'static str,
}

fn entries() -> Vec<CheckEntry> {
    checks::rules()
        .map(|rule| CheckEntry {
            id: rule.id().as_str(),
            name: rule.human_name(),
            scope: rule.id().scope().as_str(),
            description: rule.description(),
        })
        .collect()
}

pub fn handle_list_checks(format: OutputFormat) -> crate::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries())?),
        OutputFormat::Plain => {
            println!("{}", "Available checks:".bold());
            for entry in entries() {
                println!(
                    "  {:<20} {:<10} {}",
                    entry.id.cyan(),
                    entry.scope,
                    entry.description
                );
            }
        }
    }
    Ok(())
}

use anyhow::Result;
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::notes::config::load_config;
use crate::notes::visit::run_audit;

#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub root: PathBuf,
    pub json: bool,
}

pub fn run(opts: &AuditOptions) -> Result<CommandReport> {
    let config = load_config()?;
    let warnings = run_audit(&opts.root, &config)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&warnings)?);
    } else {
        for warning in &warnings {
            println!("{warning}");
        }
    }

    let mut report = CommandReport::new("audit");
    report.detail(format!("{} warning(s)", warnings.len()));
    for warning in &warnings {
        report.issue(warning.to_string());
    }
    Ok(report)
}

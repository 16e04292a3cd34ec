use anyhow::Result;
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::notes::config::load_config;
use crate::notes::session::ConsoleIo;
use crate::notes::visit::run_repair;

#[derive(Debug, Clone)]
pub struct RepairOptions {
    pub root: PathBuf,
}

pub fn run(opts: &RepairOptions) -> Result<CommandReport> {
    let config = load_config()?;
    let mut io = ConsoleIo;
    let outcome = run_repair(&opts.root, &config, &mut io)?;

    let mut report = CommandReport::new("repair");
    report.detail(format!("{} repair(s) applied", outcome.repaired));
    if outcome.aborted {
        report.detail("run aborted by user; applied repairs were kept");
    }
    Ok(report)
}

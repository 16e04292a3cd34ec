use anyhow::Result;
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::notes::config::load_config;
use crate::notes::visit::run_stats;

#[derive(Debug, Clone)]
pub struct TagsOptions {
    pub root: PathBuf,
}

pub fn run(opts: &TagsOptions) -> Result<CommandReport> {
    let config = load_config()?;
    let tally = run_stats(&opts.root, &config)?;

    print!("{}", tally.render());

    let mut report = CommandReport::new("tags");
    report.detail(format!(
        "{} sphere(s), {} project(s), {} other tag(s)",
        tally.sphere.len(),
        tally.project.len(),
        tally.other.len()
    ));
    Ok(report)
}

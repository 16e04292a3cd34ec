use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{audit, repair, tags};

/// Audit and repair a directory of plain-text notes.
#[derive(Debug, Parser)]
#[command(name = "notes-doctor", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check every note and print one warning per failed check (default)
    Audit {
        /// Directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Emit the warnings as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
    /// Print tag frequency tables for the whole tree
    Tags {
        /// Directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Interactively repair notes, one prompt per applicable fix
    Repair {
        /// Directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            audit::run(&audit::AuditOptions {
                root: PathBuf::from("."),
                json: false,
            })?;
        }
        Some(Command::Audit { root, json }) => {
            audit::run(&audit::AuditOptions { root, json })?;
        }
        Some(Command::Tags { root }) => {
            tags::run(&tags::TagsOptions { root })?;
        }
        Some(Command::Repair { root }) => {
            let report = repair::run(&repair::RepairOptions { root })?;
            for line in &report.details {
                println!("{line}");
            }
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::commands::CommandReport;
use crate::commands::archive::ArchiveOptions;
use crate::commands::create::CreateOptions;
use crate::commands::status::StatusOptions;

#[derive(Debug, Parser)]
#[command(
    name = "dayfile",
    version,
    about = "Create dated, serial-numbered source files and archive them into dated folders"
)]
struct Cli {
    /// Workspace root; defaults to DAYFILE_WORKSPACE or the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Emit the command report as JSON instead of plain lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create today's next serial-numbered source file from the template.
    Create,
    /// Move candidate files and the out/ directory into a dated archive folder.
    Archive {
        /// Report what would move without touching the filesystem.
        #[arg(long)]
        dry_run: bool,
    },
    /// Report workspace paths, pending candidates, and environment overrides.
    Status,
}

fn print_report(report: &CommandReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for detail in &report.details {
        println!("{detail}");
    }
    for issue in &report.issues {
        println!("issue: {issue}");
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = match &cli.command {
        Command::Create => commands::create::run(&CreateOptions {
            root: cli.root.clone(),
        })?,
        Command::Archive { dry_run } => commands::archive::run(&ArchiveOptions {
            root: cli.root.clone(),
            dry_run: *dry_run,
        })?,
        Command::Status => commands::status::run(&StatusOptions {
            root: cli.root.clone(),
        })?,
    };

    print_report(&report, cli.json)?;
    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}

use anyhow::Result;
use std::path::PathBuf;

use crate::commands::{CommandReport, resolve_workspace};
use crate::dayfile::create::create_source_file;

#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub root: Option<PathBuf>,
}

pub fn run(opts: &CreateOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("create");

    let Some(paths) = resolve_workspace(&mut report, opts.root.as_deref()) else {
        return Ok(report);
    };
    report.detail(format!("workspace_root={}", paths.root.display()));

    let outcome = create_source_file(&paths)?;
    report.detail(format!("date={}", outcome.date));
    report.detail(format!("serial={:03}", outcome.serial));
    report.detail(format!("file={}", outcome.file_name));
    report.detail(format!("created={}", outcome.path.display()));

    Ok(report)
}

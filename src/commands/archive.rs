use anyhow::Result;
use std::path::PathBuf;

use crate::commands::{CommandReport, resolve_workspace};
use crate::dayfile::archive::{ArchiveScan, execute, scan};

#[derive(Debug, Clone, Default)]
pub struct ArchiveOptions {
    pub root: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn run(opts: &ArchiveOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("archive");

    let Some(paths) = resolve_workspace(&mut report, opts.root.as_deref()) else {
        return Ok(report);
    };
    report.detail(format!("workspace_root={}", paths.root.display()));

    let plan = match scan(&paths)? {
        ArchiveScan::NoCandidates => {
            report.detail("no candidate files to archive");
            return Ok(report);
        }
        ArchiveScan::NoDatedFiles { candidates } => {
            report.detail(format!(
                "no dated files among {candidates} candidate(s); cannot derive an archive date"
            ));
            return Ok(report);
        }
        ArchiveScan::Ready(plan) => plan,
    };

    report.detail(format!("archive_date={}", plan.archive_date));
    report.detail(format!("target_dir={}", plan.target_dir.display()));
    report.detail(format!("candidate_files={}", plan.files.len()));
    if plan.has_aux_dir {
        report.detail(format!("aux_dir={}", paths.aux_output_dir.display()));
    }

    if opts.dry_run {
        for name in &plan.files {
            report.detail(format!("would_move={name}"));
        }
        report.detail("dry-run: nothing moved");
        return Ok(report);
    }

    let summary = execute(&paths, &plan)?;
    report.detail(format!("moved_files={}", summary.moved_files));
    report.detail(format!("moved_aux_dir={}", summary.moved_aux_dir));
    report.detail(format!("archived_to={}", summary.target_dir.display()));

    Ok(report)
}

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::commands::{CommandReport, resolve_workspace};
use crate::dayfile::naming;
use crate::dayfile::serial::next_serial;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/dayfile_env_allowlist.rs"));
}

#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    pub root: Option<PathBuf>,
}

pub fn run(opts: &StatusOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("status");

    report.detail(format!("build_id={}", env!("BUILD_UUID")));

    let Some(paths) = resolve_workspace(&mut report, opts.root.as_deref()) else {
        return Ok(report);
    };
    report.detail(format!("workspace_root={}", paths.root.display()));
    report.detail(format!("archives_dir={}", paths.archives_dir.display()));
    report.detail(format!("aux_output_dir={}", paths.aux_output_dir.display()));
    report.detail(format!("archives_present={}", paths.archives_dir.is_dir()));
    report.detail(format!("aux_output_present={}", paths.aux_output_dir.is_dir()));

    let mut candidates = 0usize;
    let mut dated = 0usize;
    let entries = fs::read_dir(&paths.root)
        .with_context(|| format!("failed to read {}", paths.root.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if naming::is_candidate_name(name) {
            candidates += 1;
            if naming::decode_date(name).is_some() {
                dated += 1;
            }
        }
    }
    report.detail(format!("candidate_files={candidates}"));
    report.detail(format!("dated_files={dated}"));

    let today = naming::today_stamp();
    report.detail(format!("today={today}"));
    report.detail(format!(
        "next_serial={:03}",
        next_serial(&paths.root, &today)
    ));

    for key in generated::GENERATED_ENV_ALLOWLIST {
        match env::var(key) {
            Ok(v) if !v.trim().is_empty() => report.detail(format!("env.{key}={}", v.trim())),
            _ => report.detail(format!("env.{key}=unset")),
        }
    }

    Ok(report)
}

use crate::dayfile::mover;
use crate::dayfile::naming;
use crate::dayfile::paths::{AUX_OUTPUT_DIR_NAME, WorkspacePaths};
use crate::dayfile::warn::{self, WarnEvent};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// What a scan of the workspace root found. The two empty cases are clean stops,
/// not errors.
#[derive(Debug, Clone)]
pub enum ArchiveScan {
    NoCandidates,
    NoDatedFiles { candidates: usize },
    Ready(ArchivePlan),
}

#[derive(Debug, Clone)]
pub struct ArchivePlan {
    pub archive_date: String,
    pub target_dir: PathBuf,
    pub files: Vec<String>,
    pub has_aux_dir: bool,
}

#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    pub target_dir: PathBuf,
    pub moved_files: usize,
    pub moved_aux_dir: bool,
}

/// Inspect the root and compute what one archive run would do.
///
/// Candidates are the root's direct files with the working extension
/// (case-insensitive). The archive date is the minimum date among the dated
/// candidates; the full candidate set moves, dated or not. Undated files ride
/// along without influencing the key.
pub fn scan(paths: &WorkspacePaths) -> Result<ArchiveScan> {
    let mut files = Vec::new();
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
            files.push(name.to_string());
        }
    }
    files.sort_unstable();

    if files.is_empty() {
        return Ok(ArchiveScan::NoCandidates);
    }

    let Some(archive_date) = files.iter().filter_map(|name| naming::decode_date(name)).min()
    else {
        return Ok(ArchiveScan::NoDatedFiles {
            candidates: files.len(),
        });
    };
    let archive_date = archive_date.to_string();

    let target_dir = paths.archives_dir.join(&archive_date);
    let has_aux_dir = paths.aux_output_dir.is_dir();

    Ok(ArchiveScan::Ready(ArchivePlan {
        archive_date,
        target_dir,
        files,
        has_aux_dir,
    }))
}

/// Drive the moves a scan planned. Every candidate file moves into the target
/// directory, then the auxiliary output directory follows: a whole-directory
/// rename when the target has no such directory yet, a recursive merge otherwise
/// (or when the rename fails). A failed move aborts the run with completed moves
/// left in place; there is no rollback.
pub fn execute(paths: &WorkspacePaths, plan: &ArchivePlan) -> Result<ArchiveSummary> {
    fs::create_dir_all(&plan.target_dir)
        .with_context(|| format!("failed to create {}", plan.target_dir.display()))?;

    for name in &plan.files {
        let src = paths.root.join(name);
        let dest = plan.target_dir.join(name);
        mover::move_file_overwrite(&src, &dest)?;
    }

    let moved_aux_dir = move_aux_output(paths, plan)?;

    Ok(ArchiveSummary {
        target_dir: plan.target_dir.clone(),
        moved_files: plan.files.len(),
        moved_aux_dir,
    })
}

fn move_aux_output(paths: &WorkspacePaths, plan: &ArchivePlan) -> Result<bool> {
    let src = &paths.aux_output_dir;
    if !src.is_dir() {
        return Ok(false);
    }

    let dest = plan.target_dir.join(AUX_OUTPUT_DIR_NAME);
    if dest.exists() {
        mover::move_dir_merge(src, &dest)?;
    } else if let Err(err) = fs::rename(src, &dest) {
        warn::emit(WarnEvent {
            code: "AUX_RENAME_FALLBACK",
            stage: "archive-aux",
            src: &src.display().to_string(),
            dest: &dest.display().to_string(),
            err: &err.to_string(),
        });
        mover::move_dir_merge(src, &dest)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{ArchiveScan, execute, scan};
    use crate::dayfile::paths::WorkspacePaths;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn workspace(root: &Path) -> WorkspacePaths {
        WorkspacePaths::for_root(root.to_path_buf())
    }

    fn run(paths: &WorkspacePaths) -> super::ArchiveSummary {
        let ArchiveScan::Ready(plan) = scan(paths).expect("scan") else {
            panic!("expected a ready plan");
        };
        execute(paths, &plan).expect("execute")
    }

    #[test]
    fn empty_root_scans_to_no_candidates() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("notes.txt"), "n").expect("write");
        let got = scan(&workspace(tmp.path())).expect("scan");
        assert!(matches!(got, ArchiveScan::NoCandidates));
    }

    #[test]
    fn undated_only_root_scans_to_no_dated_files() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("scratch.cpp"), "s").expect("write");
        fs::write(tmp.path().join("draft.CPP"), "d").expect("write");
        let got = scan(&workspace(tmp.path())).expect("scan");
        assert!(matches!(got, ArchiveScan::NoDatedFiles { candidates: 2 }));
    }

    #[test]
    fn archive_date_is_the_earliest_among_dated_names() {
        let tmp = tempdir().expect("tempdir");
        for name in ["20240105-001.cpp", "20240102-001.cpp", "20240110-001.cpp"] {
            fs::write(tmp.path().join(name), "x").expect("write");
        }
        let ArchiveScan::Ready(plan) = scan(&workspace(tmp.path())).expect("scan") else {
            panic!("expected a ready plan");
        };
        assert_eq!(plan.archive_date, "20240102");
        assert_eq!(plan.files.len(), 3);
    }

    #[test]
    fn undated_candidates_move_without_influencing_the_date() {
        let tmp = tempdir().expect("tempdir");
        let paths = workspace(tmp.path());
        fs::write(tmp.path().join("20240102-001.cpp"), "dated").expect("write");
        fs::write(tmp.path().join("scratch.cpp"), "undated").expect("write");

        let summary = run(&paths);

        assert_eq!(summary.moved_files, 2);
        let target = paths.archives_dir.join("20240102");
        assert_eq!(summary.target_dir, target);
        assert!(target.join("20240102-001.cpp").exists());
        assert!(target.join("scratch.cpp").exists());
        assert!(!tmp.path().join("scratch.cpp").exists());
    }

    #[test]
    fn aux_directory_moves_whole_when_target_is_fresh() {
        let tmp = tempdir().expect("tempdir");
        let paths = workspace(tmp.path());
        fs::write(tmp.path().join("20240101-001.cpp"), "x").expect("write");
        fs::create_dir_all(tmp.path().join("out")).expect("mkdir out");
        fs::write(tmp.path().join("out/result.txt"), "r").expect("write result");

        let summary = run(&paths);

        assert!(summary.moved_aux_dir);
        assert!(!tmp.path().join("out").exists());
        let target = paths.archives_dir.join("20240101");
        assert_eq!(
            fs::read_to_string(target.join("out/result.txt")).expect("read"),
            "r"
        );
    }

    #[test]
    fn aux_directory_merges_into_an_existing_archive() {
        let tmp = tempdir().expect("tempdir");
        let paths = workspace(tmp.path());
        let prior_out = paths.archives_dir.join("20240101/out");
        fs::create_dir_all(&prior_out).expect("mkdir prior out");
        fs::write(prior_out.join("old.txt"), "old").expect("write old");

        fs::write(tmp.path().join("20240101-002.cpp"), "x").expect("write");
        fs::create_dir_all(tmp.path().join("out")).expect("mkdir out");
        fs::write(tmp.path().join("out/new.txt"), "new").expect("write new");

        let summary = run(&paths);

        assert!(summary.moved_aux_dir);
        assert!(!tmp.path().join("out").exists());
        assert_eq!(fs::read_to_string(prior_out.join("old.txt")).expect("read"), "old");
        assert_eq!(fs::read_to_string(prior_out.join("new.txt")).expect("read"), "new");
    }

    #[test]
    fn rerun_on_the_same_date_overwrites_colliding_names() {
        let tmp = tempdir().expect("tempdir");
        let paths = workspace(tmp.path());
        fs::write(tmp.path().join("20240101-001.cpp"), "first").expect("write");
        run(&paths);

        fs::write(tmp.path().join("20240101-001.cpp"), "second").expect("rewrite");
        run(&paths);

        let archived = paths.archives_dir.join("20240101/20240101-001.cpp");
        assert_eq!(fs::read_to_string(archived).expect("read"), "second");
    }
}

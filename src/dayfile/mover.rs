use crate::dayfile::warn::{self, WarnEvent};
use crate::error::{RenameFailure, classify_rename_error};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Move a single file, replacing any same-named destination file.
///
/// Tries an atomic rename first and falls back by failure cause: cross-device
/// renames become copy-then-remove, a pre-existing destination is removed and the
/// rename retried once (last write wins), and anything else benign also goes
/// through copy-then-remove. Each fallback is tried at most once; a fallback that
/// itself fails propagates with path context. On success `src` is gone and `dest`
/// holds the source bytes.
pub fn move_file_overwrite(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => match classify_rename_error(&rename_err) {
            RenameFailure::CrossDevice => copy_then_remove(src, dest, &rename_err),
            RenameFailure::DestinationExists => {
                fs::remove_file(dest)
                    .with_context(|| format!("failed to remove {}", dest.display()))?;
                fs::rename(src, dest).with_context(|| {
                    format!("failed to move {} to {}", src.display(), dest.display())
                })
            }
            RenameFailure::Other => copy_then_remove(src, dest, &rename_err),
        },
    }
}

fn copy_then_remove(src: &Path, dest: &Path, cause: &io::Error) -> Result<()> {
    warn::emit(WarnEvent {
        code: "RENAME_FALLBACK",
        stage: "move-file",
        src: &src.display().to_string(),
        dest: &dest.display().to_string(),
        err: &cause.to_string(),
    });
    fs::copy(src, dest)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dest.display()))?;
    fs::remove_file(src).with_context(|| format!("failed to remove {}", src.display()))?;
    Ok(())
}

/// Recursively move `src_dir` into `dest_dir`, merging with whatever is already
/// there: destination-only entries survive, same-named files are overwritten per
/// `move_file_overwrite`, and subdirectories merge recursively. The emptied source
/// directory is removed best-effort afterwards; a directory that will not empty
/// (say, an unreadable straggler) is left behind rather than aborting the run. An
/// individual entry failure propagates; there is no rollback.
pub fn move_dir_merge(src_dir: &Path, dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("failed to create {}", dest_dir.display()))?;

    let entries = fs::read_dir(src_dir)
        .with_context(|| format!("failed to read {}", src_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let src = entry.path();
        let dest = dest_dir.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            move_dir_merge(&src, &dest)?;
        } else {
            move_file_overwrite(&src, &dest)?;
        }
    }

    if let Err(err) = fs::remove_dir(src_dir) {
        warn::emit(WarnEvent {
            code: "SRC_DIR_LEFT_BEHIND",
            stage: "move-dir-merge",
            src: &src_dir.display().to_string(),
            dest: &dest_dir.display().to_string(),
            err: &err.to_string(),
        });
    }
    Ok(())
}

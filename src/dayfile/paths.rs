use crate::error::WorkspaceError;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Archive destination subtree, directly under the workspace root.
pub const ARCHIVES_DIR_NAME: &str = "archives";
/// Build-output directory swept into the archive alongside the source files.
pub const AUX_OUTPUT_DIR_NAME: &str = "out";

#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub archives_dir: PathBuf,
    pub aux_output_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn for_root(root: PathBuf) -> Self {
        let archives_dir = root.join(ARCHIVES_DIR_NAME);
        let aux_output_dir = root.join(AUX_OUTPUT_DIR_NAME);
        Self {
            root,
            archives_dir,
            aux_output_dir,
        }
    }
}

/// Resolve the workspace root: explicit flag, then `DAYFILE_WORKSPACE`, then the
/// current directory. The root must already exist as a directory; the tool never
/// creates or deletes it.
pub fn resolve_workspace(cli_root: Option<&Path>) -> Result<WorkspacePaths> {
    let root = match cli_root {
        Some(path) => path.to_path_buf(),
        None => match env::var("DAYFILE_WORKSPACE") {
            Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
            _ => env::current_dir().context("failed to resolve current directory")?,
        },
    };

    if !root.is_dir() {
        return Err(WorkspaceError::RootUnavailable(root.display().to_string()).into());
    }

    Ok(WorkspacePaths::for_root(root))
}

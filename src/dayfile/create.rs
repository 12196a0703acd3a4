use crate::dayfile::naming;
use crate::dayfile::paths::WorkspacePaths;
use crate::dayfile::serial;
use crate::dayfile::template::SOURCE_TEMPLATE;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub path: PathBuf,
    pub file_name: String,
    pub date: String,
    pub serial: u32,
}

/// Allocate today's next serial and write the template to
/// `root/<date>-<serial>.cpp`. The serial scan and the write race nothing: the
/// filesystem itself is the allocation record.
pub fn create_source_file(paths: &WorkspacePaths) -> Result<CreateOutcome> {
    let date = naming::today_stamp();
    let serial = serial::next_serial(&paths.root, &date);
    let file_name = naming::encode(&date, serial);
    let path = paths.root.join(&file_name);

    fs::write(&path, SOURCE_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(CreateOutcome {
        path,
        file_name,
        date,
        serial,
    })
}

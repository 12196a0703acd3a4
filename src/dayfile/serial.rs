use crate::dayfile::naming;
use std::fs;
use std::path::Path;

/// Compute the next unused serial for `date_prefix` by scanning `dir` for names
/// matching the dated pattern with that prefix.
///
/// Only names are inspected, never contents. An unlistable directory counts as
/// empty, so a fresh workspace starts at serial 1. Not safe against concurrent
/// callers racing on the same directory; the triggering action is a single
/// interactive command.
pub fn next_serial(dir: &Path, date_prefix: &str) -> u32 {
    let mut max = 0u32;
    let Ok(entries) = fs::read_dir(dir) else {
        return max + 1;
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(serial) = naming::extract_serial(name, date_prefix) {
            max = max.max(serial);
        }
    }

    max + 1
}

pub mod archive;
pub mod create;
pub mod status;

use crate::dayfile::paths::{self, WorkspacePaths};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub ok: bool,
    pub details: Vec<String>,
    pub issues: Vec<String>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ok: true,
            details: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }

    pub fn issue(&mut self, text: impl Into<String>) {
        self.ok = false;
        self.issues.push(text.into());
    }
}

/// Resolve the workspace root for a command, absorbing the no-workspace case into
/// the report instead of letting it escape as an error.
pub fn resolve_workspace(
    report: &mut CommandReport,
    root_override: Option<&Path>,
) -> Option<WorkspacePaths> {
    match paths::resolve_workspace(root_override) {
        Ok(paths) => Some(paths),
        Err(err) => {
            report.issue(format!("{err:#}"));
            None
        }
    }
}

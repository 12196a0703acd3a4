use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("workspace root is not a directory: {0}")]
    RootUnavailable(String),
}

/// Why a `fs::rename` failed, reduced to the cases the mover handles differently.
/// Keeping the platform error-code mapping here keeps the mover itself portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameFailure {
    CrossDevice,
    DestinationExists,
    Other,
}

pub fn classify_rename_error(err: &io::Error) -> RenameFailure {
    match err.kind() {
        io::ErrorKind::CrossesDevices => RenameFailure::CrossDevice,
        io::ErrorKind::AlreadyExists => RenameFailure::DestinationExists,
        _ => RenameFailure::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::{RenameFailure, classify_rename_error};
    use std::io;

    #[test]
    fn classifies_the_two_recoverable_kinds() {
        let exdev = io::Error::new(io::ErrorKind::CrossesDevices, "exdev");
        assert_eq!(classify_rename_error(&exdev), RenameFailure::CrossDevice);

        let exists = io::Error::new(io::ErrorKind::AlreadyExists, "eexist");
        assert_eq!(
            classify_rename_error(&exists),
            RenameFailure::DestinationExists
        );
    }

    #[test]
    fn everything_else_is_other() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "eacces");
        assert_eq!(classify_rename_error(&denied), RenameFailure::Other);

        let missing = io::Error::new(io::ErrorKind::NotFound, "enoent");
        assert_eq!(classify_rename_error(&missing), RenameFailure::Other);
    }
}

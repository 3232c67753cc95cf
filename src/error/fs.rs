//! File system errors

use std::path::Path;

use super::ManagerError;

/// Creates a file read error
pub fn read_failed(path: &Path, reason: impl ToString) -> ManagerError {
    ManagerError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, reason: impl ToString) -> ManagerError {
    ManagerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a parse error for a file
pub fn parse_failed(path: &Path, reason: impl ToString) -> ManagerError {
    ManagerError::ParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ManagerError {
    ManagerError::IoError {
        message: message.into(),
    }
}

//! Source configuration errors

use std::path::Path;

use super::ManagerError;

/// Creates a duplicate source entry error
pub fn duplicate(message: impl Into<String>) -> ManagerError {
    ManagerError::DuplicateSourceEntry {
        message: message.into(),
    }
}

/// Creates an invalid source configuration error
pub fn invalid(message: impl Into<String>) -> ManagerError {
    ManagerError::InvalidSource {
        message: message.into(),
    }
}

/// Creates a source not found error
pub fn not_found(id: impl Into<String>) -> ManagerError {
    ManagerError::SourceNotFound { id: id.into() }
}

/// Creates a sources read error
pub fn read_failed(path: &Path, reason: impl ToString) -> ManagerError {
    ManagerError::SourceReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a sources write error
pub fn write_failed(path: &Path, reason: impl ToString) -> ManagerError {
    ManagerError::SourceWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

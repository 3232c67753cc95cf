//! Install and uninstall errors

use std::path::Path;

use super::ManagerError;

/// Creates a version not found error
pub fn version_not_found(id: impl Into<String>, tag: impl Into<String>) -> ManagerError {
    ManagerError::VersionNotFound {
        id: id.into(),
        tag: tag.into(),
    }
}

/// Creates an archive-not-downloaded error
pub fn not_downloaded(id: impl Into<String>, tag: impl Into<String>) -> ManagerError {
    ManagerError::NotDownloaded {
        id: id.into(),
        tag: tag.into(),
    }
}

/// Creates an invalid archive error
pub fn invalid_archive(path: &Path, reason: impl ToString) -> ManagerError {
    ManagerError::InvalidArchive {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

//! GitHub API and download errors

use super::ManagerError;

/// Creates a release fetch error for an asset id
pub fn fetch_failed(id: impl Into<String>, reason: impl ToString) -> ManagerError {
    ManagerError::SourceFetchFailed {
        id: id.into(),
        reason: reason.to_string(),
    }
}

/// Creates a download error
pub fn download_failed(url: impl Into<String>, reason: impl ToString) -> ManagerError {
    ManagerError::DownloadFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

//! Error types and handling for FrayTools Manager
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`source`]: Source configuration errors
//! - [`cache`]: Release metadata and download cache errors
//! - [`github`]: GitHub API and download errors
//! - [`install`]: Install and uninstall errors
//! - [`fs`]: File system errors

pub mod cache;
pub mod fs;
pub mod github;
pub mod install;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for FrayTools Manager operations
#[derive(Error, Diagnostic, Debug)]
pub enum ManagerError {
    // Source errors
    #[error("Invalid sources configuration: {message}")]
    #[diagnostic(
        code(fraytools_manager::source::invalid),
        help("Fix sources.json by hand or run 'fraytools-manager sources reset'")
    )]
    InvalidSource { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(fraytools_manager::source::duplicate),
        help("Each source needs its own repository and its own manifest id")
    )]
    DuplicateSourceEntry { message: String },

    #[error("Missing fields: {fields}")]
    #[diagnostic(code(fraytools_manager::source::missing_fields))]
    MissingFields { fields: String },

    #[error("No source configured for '{id}'")]
    #[diagnostic(
        code(fraytools_manager::source::not_found),
        help("Run 'fraytools-manager sources list' to see configured sources")
    )]
    SourceNotFound { id: String },

    #[error("Failed to read sources from {path}: {reason}")]
    #[diagnostic(code(fraytools_manager::source::read_failed))]
    SourceReadFailed { path: String, reason: String },

    #[error("Failed to write sources to {path}: {reason}")]
    #[diagnostic(code(fraytools_manager::source::write_failed))]
    SourceWriteFailed { path: String, reason: String },

    // Cache errors
    #[error("Release cache is invalid: {reason}")]
    #[diagnostic(
        code(fraytools_manager::cache::invalid),
        help("Run 'fraytools-manager cache clear --sources' and refresh")
    )]
    InvalidCache { reason: String },

    #[error("Unable to read release cache: {reason}")]
    #[diagnostic(code(fraytools_manager::cache::read_failed))]
    CacheReadFailed { reason: String },

    #[error("Unable to write release cache: {reason}")]
    #[diagnostic(code(fraytools_manager::cache::write_failed))]
    CacheWriteFailed { reason: String },

    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(fraytools_manager::cache::operation_failed))]
    CacheOperationFailed { message: String },

    #[error("Integrity check failed for {path}: expected {expected}, got {actual}")]
    #[diagnostic(
        code(fraytools_manager::cache::integrity),
        help("Remove the download with 'fraytools-manager cache remove' and download it again")
    )]
    IntegrityMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    // GitHub errors
    #[error("Failed to fetch data for {id}: {reason}")]
    #[diagnostic(code(fraytools_manager::github::fetch_failed))]
    SourceFetchFailed { id: String, reason: String },

    #[error("You've hit the GitHub API rate limit")]
    #[diagnostic(
        code(fraytools_manager::github::rate_limited),
        help("Unauthenticated requests are limited per hour, try again later")
    )]
    RateLimited,

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(code(fraytools_manager::github::download_failed))]
    DownloadFailed { url: String, reason: String },

    // Install errors
    #[error("Version '{tag}' not found for {id}")]
    #[diagnostic(
        code(fraytools_manager::install::version_not_found),
        help("Run 'fraytools-manager show <id>' to list known versions, or refresh sources")
    )]
    VersionNotFound { id: String, tag: String },

    #[error("No release data for {id}")]
    #[diagnostic(
        code(fraytools_manager::install::no_release_data),
        help("Run 'fraytools-manager refresh' to fetch release data")
    )]
    NoReleaseData { id: String },

    #[error("{id} {tag} has not been downloaded")]
    #[diagnostic(
        code(fraytools_manager::install::not_downloaded),
        help("Run 'fraytools-manager download' first, or pass --download")
    )]
    NotDownloaded { id: String, tag: String },

    #[error("{id} is not installed")]
    #[diagnostic(code(fraytools_manager::install::not_installed))]
    NotInstalled { id: String },

    #[error("Invalid archive {path}: {reason}")]
    #[diagnostic(code(fraytools_manager::install::invalid_archive))]
    InvalidArchive { path: String, reason: String },

    #[error("Unknown asset '{id}'")]
    #[diagnostic(
        code(fraytools_manager::install::unknown_asset),
        help("Run 'fraytools-manager list' to see known plugins and templates")
    )]
    UnknownAsset { id: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(fraytools_manager::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(fraytools_manager::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    #[diagnostic(code(fraytools_manager::fs::parse_failed))]
    ParseFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fraytools_manager::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ManagerError {
    fn from(err: std::io::Error) -> Self {
        ManagerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ManagerError {
    fn from(err: serde_json::Error) -> Self {
        ManagerError::ParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ManagerError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map_or_else(|| "unknown".to_string(), ToString::to_string);
        ManagerError::DownloadFailed {
            url,
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for ManagerError {
    fn from(err: zip::result::ZipError) -> Self {
        ManagerError::InvalidArchive {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ManagerError {
    fn from(err: inquire::InquireError) -> Self {
        ManagerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = ManagerError::SourceNotFound {
            id: "charactertemplate".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No source configured for 'charactertemplate'"
        );
    }

    #[test]
    fn test_error_code() {
        let err = ManagerError::RateLimited;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("fraytools_manager::github::rate_limited".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ManagerError = io_err.into();
        assert!(matches!(err, ManagerError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("invalid json content");
        let err: ManagerError = parse_result.unwrap_err().into();
        assert!(matches!(err, ManagerError::ParseFailed { .. }));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: ManagerError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, ManagerError::InvalidArchive { .. }));
    }

    test_error_contains!(
        test_rate_limited_error,
        ManagerError::RateLimited,
        "rate limit"
    );

    test_error_contains!(
        test_not_downloaded_error,
        ManagerError::NotDownloaded {
            id: "stagetemplate".to_string(),
            tag: "v1.0.0".to_string(),
        },
        "stagetemplate",
        "v1.0.0",
        "not been downloaded"
    );

    test_error_contains!(
        test_integrity_error,
        ManagerError::IntegrityMismatch {
            path: "a.zip".to_string(),
            expected: "blake3:aa".to_string(),
            actual: "blake3:bb".to_string(),
        },
        "a.zip",
        "blake3:aa",
        "blake3:bb"
    );

    #[test]
    fn test_duplicate_source_constructor() {
        let err = source::duplicate("Cannot add plugin source with conflicting id");
        assert!(matches!(err, ManagerError::DuplicateSourceEntry { .. }));
        assert_eq!(
            err.to_string(),
            "Cannot add plugin source with conflicting id"
        );
    }

    #[test]
    fn test_cache_constructor() {
        let err = cache::operation_failed("boom");
        assert!(err.to_string().contains("Cache operation failed: boom"));
    }

    #[test]
    fn test_fetch_constructor() {
        let err = github::fetch_failed("com.fraymakers.FraymakersTypes", "404 Not Found");
        assert!(
            err.to_string()
                .contains("Failed to fetch data for com.fraymakers.FraymakersTypes")
        );
    }
}

//! Cache errors

use super::ManagerError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> ManagerError {
    ManagerError::CacheOperationFailed {
        message: message.into(),
    }
}

/// Creates a cache read error
pub fn read_failed(reason: impl ToString) -> ManagerError {
    ManagerError::CacheReadFailed {
        reason: reason.to_string(),
    }
}

/// Creates a cache write error
pub fn write_failed(reason: impl ToString) -> ManagerError {
    ManagerError::CacheWriteFailed {
        reason: reason.to_string(),
    }
}

/// Creates an invalid cache error
pub fn invalid(reason: impl ToString) -> ManagerError {
    ManagerError::InvalidCache {
        reason: reason.to_string(),
    }
}

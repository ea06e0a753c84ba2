//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced test case does not exist
    #[error("Test case not found: {0}")]
    TestCaseNotFound(i64),

    /// SQLx error (connection, query, constraint)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File system error while preparing the database location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::TestCaseNotFound(_) => 404,
            StoreError::Database(_) | StoreError::Io(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::TestCaseNotFound(7).status_code(), 404);
        assert_eq!(StoreError::Database(sqlx::Error::PoolClosed).status_code(), 500);
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::TestCaseNotFound(42);
        assert_eq!(err.to_string(), "Test case not found: 42");
    }
}

//! # Export Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Document export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Reading the test case or its steps failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Archive encoding failed
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Writing the document file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ExportError::Store(e) => e.status_code(),
            ExportError::Zip(_) | ExportError::Io(_) => 500,
        }
    }
}

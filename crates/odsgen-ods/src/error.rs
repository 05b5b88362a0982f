//! ODS error types

use thiserror::Error;

/// Result type for ODS operations
pub type OdsResult<T> = std::result::Result<T, OdsError>;

/// Errors that can occur while writing an ODS archive
#[derive(Debug, Error)]
pub enum OdsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] odsgen_core::Error),

    /// A writer call was made out of order
    #[error("Cannot {operation} while the writer is {state}")]
    WriterState {
        operation: &'static str,
        state: &'static str,
    },

    /// An extra entry would overwrite another archive entry
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// Two tables of a document would share a name
    #[error("Duplicate table name: {0}")]
    DuplicateTable(String),
}

impl OdsError {
    /// Check whether this error reports an unavailable feature
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, OdsError::Core(e) if e.is_not_implemented())
    }
}

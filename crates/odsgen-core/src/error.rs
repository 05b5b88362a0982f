//! Error types for odsgen-core

use thiserror::Error;

use crate::style::StyleFamily;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in odsgen-core
///
/// Every variant is a contract violation reported at the offending call. The
/// structure the call was made on is left unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// A negative index was passed where a position was expected
    #[error("Negative index: {0}")]
    NegativeIndex(i64),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(usize, usize),

    /// A style with this name is already registered in the family
    #[error("Style {name:?} already exists in family {family}")]
    StyleExists { family: StyleFamily, name: String },

    /// No style with this name is registered in the family
    #[error("Style {name:?} not found in family {family}")]
    StyleNotFound { family: StyleFamily, name: String },

    /// A style handle of one family was used where another was expected
    #[error("Style {name:?} belongs to family {actual}, expected {expected}")]
    WrongStyleFamily {
        name: String,
        expected: StyleFamily,
        actual: StyleFamily,
    },

    /// A span of zero rows or columns
    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    /// A covered cell cannot span other cells
    #[error("Covered cell cannot span {0} cells")]
    CoveredCellSpan(u32),

    /// The row was already written to the output
    #[error("Row {0} was already flushed")]
    RowFlushed(usize),

    /// A flush call was made in a state that does not allow it
    #[error("Table {table:?}: cannot {operation} in state {state}")]
    FlushOrder {
        table: String,
        operation: &'static str,
        state: String,
    },

    /// The operation exists in the API but is not available
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check whether this error reports an unavailable feature
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented(_))
    }
}

//! Error types for gridsheet-core

use thiserror::Error;

use crate::cell::CellId;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridsheet-core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A row's length differs from the first row's length
    #[error("Row {row} has {actual} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Column index outside `[0, width)`
    #[error("Column index {column} out of bounds (width: {width})")]
    ColumnOutOfBounds { column: String, width: usize },

    /// No numeric cell in the aggregated column
    #[error("Column {column} contains no numeric cells")]
    NoNumericData { column: usize },

    /// Cell id does not match the cell's position
    #[error("Cell at {expected} carries id {actual}")]
    CellIdMismatch { expected: CellId, actual: CellId },

    /// Malformed item id text
    #[error("Invalid item id: {0}")]
    InvalidItemId(String),
}

/// Coarse classification of [`Error`], named after the failure a caller sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    Index,
    NoNumericData,
    CellId,
    ItemId,
}

impl ErrorKind {
    /// Name used when the error crosses a language boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Shape => "ShapeError",
            ErrorKind::Index => "IndexError",
            ErrorKind::NoNumericData => "NoNumericDataError",
            ErrorKind::CellId => "CellIdError",
            ErrorKind::ItemId => "ItemIdError",
        }
    }
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Shape { .. } => ErrorKind::Shape,
            Error::ColumnOutOfBounds { .. } => ErrorKind::Index,
            Error::NoNumericData { .. } => ErrorKind::NoNumericData,
            Error::CellIdMismatch { .. } => ErrorKind::CellId,
            Error::InvalidItemId(_) => ErrorKind::ItemId,
        }
    }
}

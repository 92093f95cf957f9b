//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The typed value stored in a cell
//! - [`CellId`] - The row/column pair a cell is labelled with
//! - [`Cell`] - An id together with its value

mod address;
mod value;

pub use address::CellId;
pub use value::CellValue;

/// A single grid cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Caller-supplied position label
    pub id: CellId,
    /// Cell content
    pub value: CellValue,
}

impl Cell {
    /// Create a new cell
    pub fn new(id: CellId, value: impl Into<CellValue>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// Create a cell whose id is the given position
    pub fn at(row: u32, col: u32, value: impl Into<CellValue>) -> Self {
        Self::new(CellId::new(row, col), value)
    }
}

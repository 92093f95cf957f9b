//! Cell id type

use std::fmt;

/// A cell's `(row, column)` label
///
/// Ids are supplied by the caller together with the cell value. A [`Sheet`](crate::Sheet)
/// only checks them against the storage position when
/// [`SheetOptions::require_positional_ids`](crate::SheetOptions::require_positional_ids) is set.
///
/// On the wire an id is the two-element array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct CellId {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u32,
}

impl CellId {
    /// Create a new cell id
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Build the id for a storage position, if it fits in `u32`
    pub fn from_position(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: u32::try_from(row).ok()?,
            col: u32::try_from(col).ok()?,
        })
    }

    /// Check whether this id names the given storage position
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row as usize == row && self.col as usize == col
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for CellId {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl From<CellId> for (u32, u32) {
    fn from(id: CellId) -> Self {
        (id.row, id.col)
    }
}

//! # gridsheet-core
//!
//! Core types for the gridsheet library.
//!
//! This crate provides:
//! - [`Sheet`] - An immutable rectangular grid of typed cells with column aggregation
//! - [`Cell`], [`CellId`] and [`CellValue`] - The cells a sheet is built from
//! - [`SheetOptions`] - Construction and aggregation settings
//! - [`Task`], [`fib`] and [`make_id`] - Small value primitives exposed next to the sheet
//!
//! ## Example
//!
//! ```rust
//! use gridsheet_core::{CellValue, Sheet};
//!
//! let sheet = Sheet::from_fn(10, 5, |row, col| CellValue::Number((row * col) as f64)).unwrap();
//! assert_eq!(sheet.width(), 5);
//! assert_eq!(sheet.height(), 10);
//! assert_eq!(sheet.get_average(3).unwrap(), 27.0);
//! ```

pub mod cell;
pub mod error;
pub mod id;
pub mod options;
pub mod sequence;
pub mod sheet;
pub mod task;

// Re-exports for convenience
pub use cell::{Cell, CellId, CellValue};
pub use error::{Error, ErrorKind, Result};
pub use id::{make_id, ItemId};
pub use options::{EmptyColumnPolicy, SheetOptions};
pub use sequence::{checked_fib, fib};
pub use sheet::{ColumnStats, Sheet};
pub use task::Task;

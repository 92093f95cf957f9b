//! Sheet type
//!
//! A [`Sheet`] is built once from a rectangular grid of [`Cell`]s and is read-only
//! afterwards. Rectangularity is checked in [`Sheet::with_options`], the single
//! construction path, so every accessor can rely on all rows having `width` cells.

use std::fmt;

use crate::cell::{Cell, CellId, CellValue};
use crate::error::{Error, Result};
use crate::options::{EmptyColumnPolicy, SheetOptions};

/// Running totals over one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Sum of the numeric cells
    pub sum: f64,
    /// Number of numeric cells
    pub numeric_count: usize,
    /// Number of cells visited (the sheet height)
    pub row_count: usize,
}

impl ColumnStats {
    /// Mean over the numeric cells, `None` when there are none
    pub fn mean(&self) -> Option<f64> {
        if self.numeric_count == 0 {
            None
        } else {
            Some(self.sum / self.numeric_count as f64)
        }
    }
}

/// An immutable rectangular grid of typed cells
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Row-major cell storage, every row has `width` cells
    rows: Vec<Vec<Cell>>,
    /// Cells per row (0 for a sheet without rows)
    width: usize,
    options: SheetOptions,
}

impl Sheet {
    /// Build a sheet with default options
    ///
    /// # Errors
    /// Returns [`Error::Shape`] if the rows are not all the same length.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Self::with_options(rows, SheetOptions::default())
    }

    /// Build a sheet with the given options
    ///
    /// # Errors
    /// Returns [`Error::Shape`] for ragged rows, and [`Error::CellIdMismatch`] when
    /// positional ids are required and a cell's id differs from its position.
    pub fn with_options(rows: Vec<Vec<Cell>>, options: SheetOptions) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::Shape {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }

            if options.require_positional_ids {
                for (col_idx, cell) in row.iter().enumerate() {
                    if !cell.id.is_at(row_idx, col_idx) {
                        return Err(Error::CellIdMismatch {
                            expected: CellId::new(row_idx as u32, col_idx as u32),
                            actual: cell.id,
                        });
                    }
                }
            }
        }

        log::debug!("built sheet: {} rows x {} columns", rows.len(), width);

        Ok(Self {
            rows,
            width,
            options,
        })
    }

    /// Build a `height` x `width` sheet with positional ids and values from `f(row, col)`
    ///
    /// # Examples
    /// ```
    /// use gridsheet_core::{CellValue, Sheet};
    ///
    /// let sheet = Sheet::from_fn(2, 3, |row, col| CellValue::from((row + col) as i64)).unwrap();
    /// assert_eq!(sheet.get(1, 2).unwrap().value, CellValue::Number(3.0));
    /// ```
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> CellValue,
    {
        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| Cell {
                        id: CellId::new(row as u32, col as u32),
                        value: f(row, col),
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Number of cells per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    /// Options the sheet was built with
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Get the cell at a storage position
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Cells of one column, in row order
    ///
    /// # Errors
    /// Returns [`Error::ColumnOutOfBounds`] if `column` is negative or `>= width`.
    pub fn get_column<I>(&self, column: I) -> Result<Vec<&Cell>>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let col = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| &row[col]).collect())
    }

    /// Sum and counts for one column
    ///
    /// Only [`CellValue::Number`] cells contribute to the sum and `numeric_count`.
    ///
    /// # Errors
    /// Returns [`Error::ColumnOutOfBounds`] if `column` is negative or `>= width`.
    pub fn column_stats<I>(&self, column: I) -> Result<ColumnStats>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let col = self.column_index(column)?;
        let mut stats = ColumnStats {
            sum: 0.0,
            numeric_count: 0,
            row_count: self.rows.len(),
        };

        for row in &self.rows {
            match &row[col].value {
                CellValue::Number(n) => {
                    stats.sum += *n;
                    stats.numeric_count += 1;
                }
                CellValue::Empty
                | CellValue::Boolean(_)
                | CellValue::String(_)
                | CellValue::Reference { .. } => {}
            }
        }

        log::trace!(
            "column {}: {} of {} cells numeric",
            col,
            stats.numeric_count,
            stats.row_count
        );
        Ok(stats)
    }

    /// Column average: the sum of the column's numeric cells divided by the sheet width
    ///
    /// Non-numeric cells add nothing. For the strict mean over numeric cells see
    /// [`Sheet::column_mean`].
    ///
    /// # Errors
    /// Returns [`Error::ColumnOutOfBounds`] for a bad index, and
    /// [`Error::NoNumericData`] when the column has no numeric cells under
    /// [`EmptyColumnPolicy::Error`].
    pub fn get_average<I>(&self, column: I) -> Result<f64>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let col = self.column_index(column)?;
        let stats = self.column_stats(col)?;
        if stats.numeric_count == 0 {
            return self.empty_column(col);
        }
        Ok(stats.sum / self.width as f64)
    }

    /// Arithmetic mean of the column's numeric cells
    ///
    /// # Errors
    /// Same as [`Sheet::get_average`].
    pub fn column_mean<I>(&self, column: I) -> Result<f64>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let col = self.column_index(column)?;
        match self.column_stats(col)?.mean() {
            Some(mean) => Ok(mean),
            None => self.empty_column(col),
        }
    }

    fn column_index<I>(&self, column: I) -> Result<usize>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        match column.try_into() {
            Ok(col) if col < self.width => Ok(col),
            _ => Err(Error::ColumnOutOfBounds {
                column: column.to_string(),
                width: self.width,
            }),
        }
    }

    fn empty_column(&self, column: usize) -> Result<f64> {
        match self.options.empty_column {
            EmptyColumnPolicy::Error => Err(Error::NoNumericData { column }),
            EmptyColumnPolicy::NaN => Ok(f64::NAN),
        }
    }
}

//! Cumulative loss triangle

use crate::error::ReservingError;

/// Cumulative claims triangle: rows are origin periods (accident or
/// underwriting years), columns are development ages.
///
/// Cells past the evaluation diagonal have not been observed yet and are
/// `None`. Missing is a first-class variant per cell, never a sentinel
/// float, so an unobserved cell can never leak into arithmetic.
///
/// Construction enforces the shape invariants once; every read afterwards
/// can assume a rectangular grid of finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    cells: Vec<Vec<Option<f64>>>,
    cols: usize,
}

impl Triangle {
    /// Build a triangle from raw cells.
    ///
    /// Fails if there are no rows, any row differs in width from the first,
    /// or any observed cell is NaN or infinite.
    pub fn new(cells: Vec<Vec<Option<f64>>>) -> Result<Self, ReservingError> {
        let cols = cells.first().ok_or(ReservingError::EmptyTriangle)?.len();

        for (row, values) in cells.iter().enumerate() {
            if values.len() != cols {
                return Err(ReservingError::NotRectangular {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            for (col, cell) in values.iter().enumerate() {
                if let Some(value) = cell {
                    if !value.is_finite() {
                        return Err(ReservingError::NonFiniteCell {
                            row,
                            col,
                            value: *value,
                        });
                    }
                }
            }
        }

        Ok(Self { cells, cols })
    }

    /// Number of origin periods.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of development ages.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Observed value at (origin row, development age), if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col).copied().flatten())
    }

    /// Rightmost observed cell of an origin row, as (age index, value).
    ///
    /// Returns `None` for a row with no observed cells.
    pub fn latest_observed(&self, row: usize) -> Option<(usize, f64)> {
        self.cells.get(row)?.iter().enumerate().rev().find_map(
            |(col, cell)| cell.map(|value| (col, value)),
        )
    }
}

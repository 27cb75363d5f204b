use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::matrix::finder::in_finder_zone;

/// Rectangular grid of QR modules (`true` = dark), stored row-major.
///
/// Row 0 is the top of the symbol. The matrix is produced by a symbol encoder and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleMatrix {
    rows: usize,
    cols: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Create a matrix from row-major module values.
    pub fn new(rows: usize, cols: usize, modules: Vec<bool>) -> QrStyleResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(QrStyleError::invalid_parameter(
                "module matrix must have at least one row and one column",
            ));
        }
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            QrStyleError::invalid_parameter("module matrix dimensions overflow")
        })?;
        if modules.len() != expected {
            return Err(QrStyleError::invalid_parameter(format!(
                "module matrix expects {expected} cells for {rows}x{cols}, got {}",
                modules.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            modules,
        })
    }

    /// Create a matrix from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> QrStyleResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(QrStyleError::invalid_parameter(format!(
                "module matrix is not rectangular: row {bad} has {} cells, expected {cols}",
                rows[bad].len()
            )));
        }
        let n = rows.len();
        Self::new(n, cols, rows.into_iter().flatten().collect())
    }

    /// Create a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> QrStyleResult<Self> {
        let mut modules = Vec::with_capacity(rows.saturating_mul(cols));
        for r in 0..rows {
            for c in 0..cols {
                modules.push(f(r, c));
            }
        }
        Self::new(rows, cols, modules)
    }

    /// Number of module rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of module columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Module value at `(row, col)`; out-of-range cells read as light.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.modules[row * self.cols + col]
    }

    /// Whether `(row, col)` belongs to one of the three finder patterns of this matrix.
    pub fn is_finder(&self, row: usize, col: usize) -> bool {
        in_finder_zone(row, col, self.rows, self.cols)
    }

    /// Iterate `(row, col)` of every dark module in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/model.rs"]
mod tests;

//! Determinant by cofactor expansion
//!
//! Expands along the first row and recurses on the minors. The cost is
//! factorial in the dimension, so this is only meant for small matrices
//! (see [`PRACTICAL_DIMENSION_LIMIT`](crate::PRACTICAL_DIMENSION_LIMIT)).

use crate::error::{CramerError, Result};
use ndarray::{Array2, ArrayView2, Axis};

/// Determinant of a square matrix.
///
/// An empty matrix has determinant 1.
pub fn determinant(matrix: ArrayView2<'_, f64>) -> Result<f64> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(CramerError::NotSquare {
            rows,
            row: 0,
            cols,
        });
    }
    if rows == 0 {
        return Ok(1.0);
    }
    Ok(cofactor_expansion(matrix))
}

/// Submatrix with `row` and `col` removed
pub fn minor(matrix: ArrayView2<'_, f64>, row: usize, col: usize) -> Array2<f64> {
    let rows: Vec<usize> = (0..matrix.nrows()).filter(|&r| r != row).collect();
    let cols: Vec<usize> = (0..matrix.ncols()).filter(|&c| c != col).collect();
    matrix.select(Axis(0), &rows).select(Axis(1), &cols)
}

// Caller guarantees a non-empty square matrix.
pub(crate) fn cofactor_expansion(m: ArrayView2<'_, f64>) -> f64 {
    match m.nrows() {
        1 => m[[0, 0]],
        2 => m[[0, 0]] * m[[1, 1]] - m[[0, 1]] * m[[1, 0]],
        // zero entries contribute nothing, so their minors are never expanded
        n => (0..n)
            .filter(|&i| m[[0, i]] != 0.0)
            .map(|i| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                sign * m[[0, i]] * cofactor_expansion(minor(m, 0, i).view())
            })
            .fold(0.0, |acc, term| acc + term),
    }
}

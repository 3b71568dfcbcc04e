//! Linear system containers
//!
//! [`RawSystem`] is what the loader produces: rows of coefficients of any
//! length. [`LinearSystem`] is the validated square form the solver works on.

use crate::error::{CramerError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Unvalidated system as read from text: one coefficient row and one
/// right-hand side value per equation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSystem {
    /// Coefficient rows (may be ragged)
    pub rows: Vec<Vec<f64>>,
    /// Right-hand side values, one per row
    pub rhs: Vec<f64>,
}

impl RawSystem {
    /// Number of equations read
    pub fn num_equations(&self) -> usize {
        self.rows.len()
    }

    /// Check that every row has as many coefficients as there are rows and
    /// build the square system.
    pub fn into_square(self) -> Result<LinearSystem> {
        let n = self.rows.len();
        if n == 0 {
            return Err(CramerError::EmptySystem);
        }
        if let Some((row, cols)) = self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != n)
        {
            return Err(CramerError::NotSquare { rows: n, row, cols });
        }

        let flat: Vec<f64> = self.rows.into_iter().flatten().collect();
        let a = Array2::from_shape_vec((n, n), flat).map_err(|_| CramerError::NotSquare {
            rows: n,
            row: 0,
            cols: n,
        })?;
        LinearSystem::new(a, Array1::from_vec(self.rhs))
    }
}

/// Square linear system `Ax = b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    a: Array2<f64>,
    b: Array1<f64>,
}

impl LinearSystem {
    /// Create a system, checking that `a` is square and `b` matches it.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> Result<Self> {
        let n = a.nrows();
        if n == 0 {
            return Err(CramerError::EmptySystem);
        }
        if a.ncols() != n {
            return Err(CramerError::NotSquare {
                rows: n,
                row: 0,
                cols: a.ncols(),
            });
        }
        if b.len() != n {
            return Err(CramerError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// Coefficient matrix
    pub fn matrix(&self) -> &Array2<f64> {
        &self.a
    }

    /// Right-hand side
    pub fn rhs(&self) -> &Array1<f64> {
        &self.b
    }

    /// Number of unknowns
    pub fn dim(&self) -> usize {
        self.b.len()
    }
}

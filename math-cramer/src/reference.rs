//! Reference solver
//!
//! LU factorization with partial pivoting. It is never used to produce a
//! Cramer solution; it only gives an independent answer to compare against.

use crate::error::{CramerError, Result};
use crate::system::LinearSystem;
use ndarray::{Array1, Array2};
use serde::Serialize;

/// Pivot magnitude below which the matrix is treated as singular
const PIVOT_TOLERANCE: f64 = 1e-30;

/// LU factorization result
///
/// Stores L and U factors along with pivot information
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Array2<f64>,
    /// Row permutation applied during pivoting
    pub pivots: Vec<usize>,
    /// Matrix dimension
    pub n: usize,
}

impl LuFactorization {
    /// Solve Ax = b using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        if b.len() != self.n {
            return Err(CramerError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        // Pb
        let mut x = Array1::from_iter(self.pivots.iter().map(|&p| b[p]));

        // Forward substitution: Ly = Pb
        for i in 0..self.n {
            for j in 0..i {
                x[i] -= self.lu[[i, j]] * x[j];
            }
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                x[i] -= self.lu[[i, j]] * x[j];
            }
            let u_ii = self.lu[[i, i]];
            if u_ii.abs() < PIVOT_TOLERANCE {
                return Err(CramerError::Singular);
            }
            x[i] /= u_ii;
        }

        Ok(x)
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize(a: &Array2<f64>) -> Result<LuFactorization> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(CramerError::NotSquare {
            rows: n,
            row: 0,
            cols: a.ncols(),
        });
    }

    let mut lu = a.clone();
    let mut pivots: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < PIVOT_TOLERANCE {
            return Err(CramerError::Singular);
        }

        if max_row != k {
            for j in 0..n {
                lu.swap([k, j], [max_row, j]);
            }
            pivots.swap(k, max_row);
        }

        // Compute multipliers and eliminate
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(LuFactorization { lu, pivots, n })
}

/// Solve Ax = b using LU decomposition
pub fn lu_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    lu_factorize(a)?.solve(b)
}

/// Comparison of a solution against the reference solver
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verification {
    /// Largest absolute component of `Ax - b`
    pub residual: f64,
    /// Largest absolute difference from the LU solution
    pub max_deviation: f64,
}

/// Compare `x` with the LU solution of `system`
pub fn verify(system: &LinearSystem, x: &Array1<f64>) -> Result<Verification> {
    let reference = lu_solve(system.matrix(), system.rhs())?;
    let max_abs = |v: Array1<f64>| v.iter().fold(0.0_f64, |acc, r| acc.max(r.abs()));

    let residual = max_abs(system.matrix().dot(x) - system.rhs());
    let max_deviation = max_abs(x - &reference);
    log::info!(
        "Verification: residual = {:.3e}, max deviation from LU = {:.3e}",
        residual,
        max_deviation
    );
    Ok(Verification {
        residual,
        max_deviation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_lu_solve_real() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0],];
        let b = array![1.0_f64, 2.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");

        // Verify: Ax = b
        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_needs_pivoting() {
        let a = array![[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]];
        let b = array![1.0, 2.0, 3.0];

        let x = lu_solve(&a, &b).expect("LU solve should succeed");
        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0],];
        let b = array![1.0_f64, 2.0];
        assert!(matches!(lu_solve(&a, &b), Err(CramerError::Singular)));
    }

    #[test]
    fn test_lu_factorize_and_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0],];

        let factorization = lu_factorize(&a).expect("Factorization should succeed");

        // Solve multiple RHS
        for b in [array![1.0_f64, 2.0, 3.0], array![4.0_f64, 5.0, 6.0]] {
            let x = factorization.solve(&b).expect("Solve should succeed");
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_verify_exact_solution() {
        let system = LinearSystem::new(array![[2.0, 1.0], [1.0, 3.0]], array![5.0, 10.0]).unwrap();
        let check = verify(&system, &array![1.0, 3.0]).unwrap();
        assert!(check.residual < 1e-12);
        assert!(check.max_deviation < 1e-12);
    }

    #[test]
    fn test_verify_wrong_solution() {
        let system = LinearSystem::new(array![[2.0, 1.0], [1.0, 3.0]], array![5.0, 10.0]).unwrap();
        let check = verify(&system, &array![1.0, 4.0]).unwrap();
        assert_relative_eq!(check.residual, 3.0, epsilon = 1e-12);
        assert_relative_eq!(check.max_deviation, 1.0, epsilon = 1e-12);
    }
}

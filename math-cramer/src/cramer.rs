//! Cramer's rule
//!
//! `x_i = det(A_i) / det(A)` where `A_i` is `A` with column `i` replaced by
//! `b`. Each unknown is an independent task; results are collected in index
//! order so every slot of the solution is written by exactly one task.

use crate::config::SolverConfig;
use crate::determinant::{cofactor_expansion, determinant};
use crate::error::{CramerError, Result};
use crate::loader::load_system;
use crate::parallel::{is_parallel_available, map_indexed_with};
use crate::system::LinearSystem;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest dimension that cofactor expansion handles in reasonable time
pub const PRACTICAL_DIMENSION_LIMIT: usize = 10;

/// Whether a system of dimension `n` is past [`PRACTICAL_DIMENSION_LIMIT`]
pub fn exceeds_practical_limit(n: usize) -> bool {
    n > PRACTICAL_DIMENSION_LIMIT
}

/// Solution of a linear system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CramerSolution {
    /// Solution vector, in unknown order
    #[serde(with = "plain_vector")]
    pub x: Array1<f64>,
    /// Determinant of the coefficient matrix
    pub determinant: f64,
}

/// `Array1` as a bare JSON list rather than ndarray's `{v, dim, data}` form
mod plain_vector {
    use ndarray::Array1;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(x: &Array1<f64>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(x.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Array1<f64>, D::Error> {
        Vec::<f64>::deserialize(d).map(Array1::from_vec)
    }
}

impl CramerSolution {
    /// Largest absolute component of `Ax - b`
    pub fn residual(&self, system: &LinearSystem) -> f64 {
        let ax = system.matrix().dot(&self.x);
        (&ax - system.rhs())
            .iter()
            .fold(0.0_f64, |acc, r| acc.max(r.abs()))
    }
}

/// Copy of `a` with column `index` replaced by `b`
pub fn substitute_column(
    a: ArrayView2<'_, f64>,
    b: ArrayView1<'_, f64>,
    index: usize,
) -> Array2<f64> {
    let mut a_i = a.to_owned();
    a_i.column_mut(index).assign(&b);
    a_i
}

/// Value of unknown `index`, given the precomputed `det_a` (must be non-zero)
pub fn solve_variable(
    a: ArrayView2<'_, f64>,
    b: ArrayView1<'_, f64>,
    index: usize,
    det_a: f64,
) -> f64 {
    let a_i = substitute_column(a, b, index);
    cofactor_expansion(a_i.view()) / det_a
}

/// Solve `Ax = b` with Cramer's rule
pub fn solve(system: &LinearSystem, config: &SolverConfig) -> Result<CramerSolution> {
    let n = system.dim();
    if exceeds_practical_limit(n) {
        log::warn!(
            "{}x{} system: cofactor expansion grows factorially and may not finish",
            n,
            n
        );
    }

    let a = system.matrix().view();
    let b = system.rhs().view();

    let det_a = determinant(a)?;
    log::debug!("det(A) = {}", det_a);
    if det_a == 0.0 {
        return Err(CramerError::Singular);
    }

    let x = map_indexed_with(n, &config.parallel, |i| solve_variable(a, b, i, det_a))?;
    log::info!(
        "Solved {} unknowns ({})",
        n,
        if config.parallel.enabled && is_parallel_available() {
            "parallel"
        } else {
            "sequential"
        }
    );

    Ok(CramerSolution {
        x: Array1::from_vec(x),
        determinant: det_a,
    })
}

/// Load a system from `path`, check it is square and solve it
pub fn solve_file<P: AsRef<Path>>(path: P, config: &SolverConfig) -> Result<CramerSolution> {
    let system = load_system(path)?.into_square()?;
    solve(&system, config)
}

//! Small dense linear systems solved with Cramer's rule
//!
//! Each unknown is the ratio of two determinants computed by cofactor
//! expansion, and every unknown is solved as an independent parallel task.
//! The cost grows factorially with the dimension, which limits this crate to
//! systems of roughly ten unknowns.
//!
//! # Features
//!
//! - **Loader**: whitespace-separated text, one equation per line
//! - **Determinants**: recursive cofactor expansion along the first row
//! - **Parallelism**: one rayon task per unknown (`native` feature), sequential fallback
//! - **Reference check**: LU with partial pivoting to validate results
//!
//! # Example
//!
//! ```
//! use math_audio_cramer::{SolverConfig, parse_system, solve};
//!
//! let system = parse_system("2 1 5\n1 3 10\n")?.into_square()?;
//! let solution = solve(&system, &SolverConfig::default())?;
//! assert!((solution.x[0] - 1.0).abs() < 1e-12);
//! assert!((solution.x[1] - 3.0).abs() < 1e-12);
//! # Ok::<(), math_audio_cramer::CramerError>(())
//! ```

pub mod config;
pub mod cramer;
pub mod determinant;
pub mod error;
pub mod loader;
pub mod parallel;
pub mod reference;
pub mod system;

pub use config::{ParallelConfig, SolverConfig};
pub use cramer::{
    CramerSolution, PRACTICAL_DIMENSION_LIMIT, exceeds_practical_limit, solve, solve_file,
    solve_variable, substitute_column,
};
pub use determinant::{determinant, minor};
pub use error::{CramerError, Result};
pub use loader::{load_system, parse_reader, parse_system};
pub use reference::{LuFactorization, Verification, lu_factorize, lu_solve, verify};
pub use system::{LinearSystem, RawSystem};

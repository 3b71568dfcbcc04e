//! Error types for the Cramer's rule solver.
//!
//! Every failure is raised before any solving task is spawned: reading the
//! input, validating its shape, or finding a singular coefficient matrix.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or solving a linear system.
#[derive(Debug, Error)]
pub enum CramerError {
    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A token could not be parsed as a real number.
    #[error("line {line}: '{token}' is not a number")]
    Parse {
        /// 1-based line number
        line: usize,
        /// The offending token
        token: String,
    },

    /// A line holds only the right-hand side value.
    #[error("line {line}: expected coefficients followed by a right-hand side value")]
    MissingCoefficients {
        /// 1-based line number
        line: usize,
    },

    /// The input contains no equations.
    #[error("input contains no equations")]
    EmptySystem,

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows} rows, row {row} has {cols} coefficients")]
    NotSquare {
        /// Number of rows (equations)
        rows: usize,
        /// 0-based index of the first offending row
        row: usize,
        /// Number of coefficients in that row
        cols: usize,
    },

    /// Right-hand side length does not match the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// The determinant of the coefficient matrix is exactly zero.
    #[error("determinant is zero, the system has no unique solution")]
    Singular,

    /// The dedicated thread pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, CramerError>;

impl CramerError {
    /// Returns `true` if the error comes from malformed or unreadable input.
    ///
    /// This includes `Io`, `Parse`, `MissingCoefficients`, `EmptySystem`,
    /// `NotSquare` and `DimensionMismatch`.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CramerError::Io { .. }
                | CramerError::Parse { .. }
                | CramerError::MissingCoefficients { .. }
                | CramerError::EmptySystem
                | CramerError::NotSquare { .. }
                | CramerError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if the system has no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(self, CramerError::Singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_square_display() {
        let err = CramerError::NotSquare {
            rows: 2,
            row: 1,
            cols: 3,
        };
        assert_eq!(
            err.to_string(),
            "matrix is not square: 2 rows, row 1 has 3 coefficients"
        );
    }

    #[test]
    fn test_singular_display() {
        assert!(
            CramerError::Singular
                .to_string()
                .contains("no unique solution")
        );
    }

    #[test]
    fn test_io_display_contains_path() {
        let err = CramerError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_categories() {
        let parse = CramerError::Parse {
            line: 3,
            token: "x".into(),
        };
        assert!(parse.is_input_error());
        assert!(!parse.is_singular());

        assert!(CramerError::Singular.is_singular());
        assert!(!CramerError::Singular.is_input_error());
        assert!(!CramerError::ThreadPool("boom".into()).is_input_error());
    }
}

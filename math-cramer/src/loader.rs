//! Text loader for linear systems
//!
//! Each non-blank line is one equation: its coefficients followed by the
//! right-hand side value, all separated by whitespace.
//!
//! ```text
//! 2 1 5
//! 1 3 10
//! ```
//!
//! Row lengths are not compared here; [`RawSystem::into_square`] does that.

use crate::error::{CramerError, Result};
use crate::system::RawSystem;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a system from a file
pub fn load_system<P: AsRef<Path>>(path: P) -> Result<RawSystem> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CramerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = parse_reader(BufReader::new(file)).map_err(|err| match err {
        CramerError::Io { source, .. } => CramerError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    log::debug!(
        "Loaded {} equations from {}",
        raw.num_equations(),
        path.display()
    );
    Ok(raw)
}

/// Parse a system from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<RawSystem> {
    let mut raw = RawSystem::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CramerError::Io {
            path: "<reader>".into(),
            source,
        })?;
        push_equation(&mut raw, idx + 1, &line)?;
    }
    if raw.rows.is_empty() {
        return Err(CramerError::EmptySystem);
    }
    Ok(raw)
}

/// Parse a system from an in-memory string
pub fn parse_system(text: &str) -> Result<RawSystem> {
    parse_reader(text.as_bytes())
}

fn push_equation(raw: &mut RawSystem, line_no: usize, line: &str) -> Result<()> {
    let mut values = line
        .split_whitespace()
        .map(|token| {
            // nan and inf parse as f64 but cannot take part in a solution
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CramerError::Parse {
                    line: line_no,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    let Some(rhs) = values.pop() else {
        // blank line
        return Ok(());
    };
    if values.is_empty() {
        return Err(CramerError::MissingCoefficients { line: line_no });
    }

    raw.rows.push(values);
    raw.rhs.push(rhs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_equations() {
        let raw = parse_system("2 1 5\n1 3 10\n").unwrap();
        assert_eq!(raw.rows, vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        assert_eq!(raw.rhs, vec![5.0, 10.0]);
    }

    #[test]
    fn test_blank_lines_and_extra_spaces() {
        let raw = parse_system("\n  2\t1   5  \n\n1 3 10\n   \n").unwrap();
        assert_eq!(raw.num_equations(), 2);
        assert_eq!(raw.rhs, vec![5.0, 10.0]);
    }

    #[test]
    fn test_scientific_and_negative_values() {
        let raw = parse_system("-1.5e1 2.5 -3\n").unwrap();
        assert_eq!(raw.rows, vec![vec![-15.0, 2.5]]);
        assert_eq!(raw.rhs, vec![-3.0]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let raw = parse_system("1 2 3\n4 5\n").unwrap();
        assert_eq!(raw.rows, vec![vec![1.0, 2.0], vec![4.0]]);
    }

    #[test]
    fn test_bad_token_reports_line() {
        match parse_system("1 2 3\n4 five 6\n") {
            Err(CramerError::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "five");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_tokens_rejected() {
        for (text, bad) in [
            ("1 2 nan\n3 4 1\n", "nan"),
            ("1 inf 3\n", "inf"),
            ("1 2 3\n-infinity 4 5\n", "-infinity"),
        ] {
            match parse_system(text) {
                Err(CramerError::Parse { token, .. }) => assert_eq!(token, bad),
                other => panic!("expected Parse error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_file_and_string_parse_alike() {
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/data/three_by_three.txt");
        let from_file = load_system(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_file, parse_system(&text).unwrap());
    }

    #[test]
    fn test_single_token_line() {
        assert!(matches!(
            parse_system("1 2 3\n7\n"),
            Err(CramerError::MissingCoefficients { line: 2 })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_system(""), Err(CramerError::EmptySystem)));
        assert!(matches!(
            parse_system("\n \n"),
            Err(CramerError::EmptySystem)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_system("does/not/exist/matrix.txt").unwrap_err();
        assert!(matches!(err, CramerError::Io { .. }));
        assert!(err.to_string().contains("matrix.txt"));
    }
}

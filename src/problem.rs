//! Weight matrix definition, parsing and validation.

use crate::error::{TspError, TspResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Largest number of nodes a matrix may describe.
pub const MAX_NODES: usize = 25;

/// Largest weight accepted on any edge.
pub const MAX_WEIGHT: f64 = 10_000_000.0;

/// Tolerance used for the zero-diagonal, symmetry and connectivity checks.
pub const EPSILON: f64 = 1e-9;

/// A complete, symmetric, non-negatively weighted graph stored as a dense
/// n×n matrix.
///
/// A `WeightMatrix` can only be built through [`WeightMatrix::new`],
/// [`WeightMatrix::parse`] or [`WeightMatrix::from_file`], all of which
/// enforce the invariants the solvers rely on:
/// square, at most [`MAX_NODES`] nodes, zero diagonal, symmetric, and every
/// off-diagonal weight strictly positive and at most [`MAX_WEIGHT`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightMatrix {
    weights: Vec<Vec<f64>>,
}

impl WeightMatrix {
    /// Build a matrix from rows, validating shape and values.
    pub fn new(weights: Vec<Vec<f64>>) -> TspResult<Self> {
        let n = weights.len();
        Self::check_size(n)?;

        for (i, row) in weights.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::RowLength {
                    row: i + 1,
                    expected: n,
                    found: row.len(),
                });
            }

            for (j, &value) in row.iter().enumerate() {
                Self::check_value(value, i, j)?;
            }
        }

        let matrix = WeightMatrix { weights };
        matrix.check_structure()?;
        Ok(matrix)
    }

    /// Parse a matrix from text: one row per line, values separated by
    /// whitespace or commas. Blank lines are ignored.
    pub fn parse(input: &str) -> TspResult<Self> {
        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        let n = lines.len();
        Self::check_size(n)?;

        let mut weights = vec![vec![0.0; n]; n];

        for (i, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .collect();

            if tokens.len() != n {
                return Err(TspError::RowLength {
                    row: i + 1,
                    expected: n,
                    found: tokens.len(),
                });
            }

            for (j, token) in tokens.iter().enumerate() {
                let invalid = || TspError::InvalidNumber {
                    token: token.to_string(),
                    row: i + 1,
                    column: j + 1,
                };

                if !is_plain_decimal(token) {
                    return Err(invalid());
                }

                let value: f64 = token.parse().map_err(|_| invalid())?;
                Self::check_value(value, i, j)?;
                weights[i][j] = value;
            }
        }

        let matrix = WeightMatrix { weights };
        matrix.check_structure()?;
        Ok(matrix)
    }

    /// Load a matrix from a text file in the format accepted by [`WeightMatrix::parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> TspResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Weight of the edge between `from` and `to`.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.weights[from][to]
    }

    /// The raw rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.weights
    }

    fn check_size(n: usize) -> TspResult<()> {
        if n == 0 {
            return Err(TspError::Empty);
        }
        if n > MAX_NODES {
            return Err(TspError::TooLarge {
                size: n,
                max: MAX_NODES,
            });
        }
        Ok(())
    }

    fn check_value(value: f64, i: usize, j: usize) -> TspResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(TspError::InvalidWeight {
                value,
                row: i + 1,
                column: j + 1,
            });
        }
        if value > MAX_WEIGHT {
            return Err(TspError::WeightTooLarge {
                value,
                row: i + 1,
                column: j + 1,
                max: MAX_WEIGHT,
            });
        }
        Ok(())
    }

    /// Diagonal, symmetry and connectivity checks, in row-major order.
    fn check_structure(&self) -> TspResult<()> {
        let n = self.size();

        for i in 0..n {
            let diagonal = self.weights[i][i];
            if diagonal.abs() > EPSILON {
                return Err(TspError::NonZeroDiagonal {
                    node: i + 1,
                    value: diagonal,
                });
            }

            for j in i + 1..n {
                if (self.weights[i][j] - self.weights[j][i]).abs() > EPSILON {
                    return Err(TspError::Asymmetric {
                        row: i + 1,
                        column: j + 1,
                    });
                }

                if self.weights[i][j].abs() < EPSILON {
                    return Err(TspError::MissingEdge { from: i + 1, to: j + 1 });
                }
            }
        }

        Ok(())
    }
}

/// Accepts `0`, or digits without a leading zero, optionally followed by a
/// fractional part with at least one digit. Signs and exponents are rejected.
fn is_plain_decimal(token: &str) -> bool {
    let (integer, fraction) = match token.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (token, None),
    };

    let integer_ok = !integer.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && (integer == "0" || !integer.starts_with('0'));

    let fraction_ok = match fraction {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };

    integer_ok && fraction_ok
}

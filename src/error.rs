//! Error types for the TSP heuristics.
//!
//! The construction and optimization algorithms themselves never fail: they
//! trust a validated [`WeightMatrix`](crate::problem::WeightMatrix). Everything
//! that can go wrong before or after a solve (parsing, validation, caller
//! input, writing results) is reported through [`TspError`].

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for matrix parsing, solver input and result output.
///
/// Row and column numbers carried by the variants are 1-based, matching how
/// the matrix is presented to a user.
#[derive(Debug, Error)]
pub enum TspError {
    #[error("Input is empty. Please enter an n×n matrix.")]
    Empty,

    #[error("Matrix size ({size}×{size}) exceeds maximum allowed {max}×{max}.")]
    TooLarge { size: usize, max: usize },

    #[error("At least two nodes are required.")]
    TooFewNodes,

    #[error("In line {row} should be {expected} values, found {found}.")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Incorrect number format '{token}' in row {row}, column {column}.")]
    InvalidNumber {
        token: String,
        row: usize,
        column: usize,
    },

    #[error("Invalid weight {value} in row {row}, column {column}.")]
    InvalidWeight { value: f64, row: usize, column: usize },

    #[error("Weight {value} in row {row}, column {column} exceeds maximum allowed ({max}).")]
    WeightTooLarge {
        value: f64,
        row: usize,
        column: usize,
        max: f64,
    },

    #[error("Diagonal element ({node},{node}) should be zero (found {value}).")]
    NonZeroDiagonal { node: usize, value: f64 },

    #[error("Matrix is asymmetric at ({row},{column}).")]
    Asymmetric { row: usize, column: usize },

    #[error("No connection between nodes {from} and {to}.")]
    MissingEdge { from: usize, to: usize },

    #[error("Start node {start} is out of range (1..={nodes}).")]
    StartOutOfRange { start: usize, nodes: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

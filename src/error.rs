//! Error type shared by every fallible operation of the crate.

use std::fmt;

/// Failures reported while building a problem or materializing a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// The instance has zero nodes; there is nothing to optimize.
    EmptyInstance,
    /// A row of a precomputed distance matrix has the wrong length.
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A node has a NaN or infinite coordinate.
    NonFiniteCoordinate { index: usize },
    /// A precomputed distance matrix has a non-zero diagonal entry.
    NonZeroDiagonal { index: usize, value: u64 },
    /// A precomputed distance matrix has `D[i][j] != D[j][i]`.
    Asymmetric { i: usize, j: usize },
    /// A decision vector does not have one value per node.
    DimensionMismatch { expected: usize, got: usize },
    /// A decision vector value lies outside its variable bounds (or is NaN).
    ValueOutOfBounds { index: usize, value: f64 },
    /// A sequence meant as a tour repeats or skips a node.
    NotAPermutation { len: usize },
    /// A configuration could not be parsed or holds an unusable value.
    InvalidConfig(String),
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInstance => write!(f, "zero nodes were given as input"),
            Self::NonFiniteCoordinate { index } => {
                write!(f, "node {index} has a non-finite coordinate")
            }
            Self::NotSquare { row, expected, got } => {
                write!(f, "distance matrix row {row} has {got} columns, expected {expected}")
            }
            Self::NonZeroDiagonal { index, value } => {
                write!(f, "distance matrix diagonal entry {index} is {value}, expected 0")
            }
            Self::Asymmetric { i, j } => {
                write!(f, "distance matrix is not symmetric at ({i}, {j})")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "decision vector has {got} values, expected {expected}")
            }
            Self::ValueOutOfBounds { index, value } => {
                write!(f, "decision variable {index} = {value} is out of bounds")
            }
            Self::NotAPermutation { len } => {
                write!(f, "sequence is not a permutation of 0..{len}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}

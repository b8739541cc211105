// src/error.rs
use thiserror::Error;

/// Failures for grid construction and contour extraction.
///
/// Grid shape is the only fatal condition. Numeric edge cases during
/// extraction (isovalue ties, near-equal edge samples, missing crossings)
/// are resolved by fixed policies and never surface as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid too small for contouring: {cols}x{rows}, need at least 2x2")]
    TooSmall { cols: usize, rows: usize },

    #[error("Ragged row {row}: expected {expected} samples, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;

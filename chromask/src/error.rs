//! Error types for the mask pipeline.

use thiserror::Error;

/// Errors that can occur while classifying, labeling or extracting components.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{what} must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        what: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("Raster sample buffer has {actual} samples, expected {expected}")]
    SampleCount { expected: usize, actual: usize },

    #[error("Threshold '{name}' must be a finite number, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::EmptyGrid`] when either dimension is zero.
pub(crate) fn ensure_non_empty(what: &'static str, rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyGrid { what, rows, cols });
    }
    Ok(())
}

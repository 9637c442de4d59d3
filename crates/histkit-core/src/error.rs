//! Error types for histogram manipulation
//!
//! Provides a unified error type for all histkit crates.

use thiserror::Error;

/// Core error type for histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Axis index outside the histogram's dimensionality
    #[error("Axis {axis} out of range for histogram with {ndim} axes")]
    AxisOutOfRange { axis: usize, ndim: usize },

    /// Requested target bin count does not divide the current bin count
    #[error("Axis {axis}: new_bins must divide existing bins ({bins} bins, {target} requested)")]
    InvalidRebinTarget {
        axis: usize,
        bins: usize,
        target: usize,
    },

    /// Merge factor is zero or does not divide the bin count
    #[error("Axis {axis}: cannot merge {bins} bins by a factor of {factor}")]
    InvalidMergeFactor {
        axis: usize,
        bins: usize,
        factor: usize,
    },

    /// Value array shape disagrees with the axes
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Plot rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a non-finite floating point argument
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} must be finite"))
    }

    /// Create an error for a size mismatch between two collections
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create a rendering error from any displayable backend failure
    pub fn render<E: std::fmt::Display>(err: E) -> Self {
        Self::Render(err.to_string())
    }
}

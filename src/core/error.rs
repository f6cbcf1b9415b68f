//! Centralised error types used across the crate.

use thiserror::Error;

use crate::core::{color::ColorError, data::ParseDataError};

/// Top-level error type bubbled up by public APIs.
///
/// Every variant is raised before the canvas is touched, so a render either
/// completes or produces nothing.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Inputs disagree in length; the message is the user-facing diagnostic.
    #[error("inputs are not the same size: {what} has {got} values, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("data set is empty")]
    EmptyData,
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error("range of Y values ({range}) rounds to zero, nothing to draw")]
    DegenerateRange { range: f64 },
    #[error("{what} contains a value that is not a finite number")]
    NonFinite { what: &'static str },
    #[error("range of Y values ({range}) needs more than {max_cells} cells to draw")]
    CanvasTooLarge { range: f64, max_cells: usize },
    #[error("range of Y values is zero, cannot scale data")]
    Scale,
    #[error("grid period must be at least 1x1, got {width}x{height}")]
    InvalidGrid { width: usize, height: usize },
    #[error("could not parse data: {0}")]
    Data(#[from] ParseDataError),
    #[error("no input method provided (use --stdin or --file)")]
    NoInput,
}

impl PlotError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Data(_) => 2,
            _ => 1,
        }
    }
}

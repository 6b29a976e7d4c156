//! Error types for height-field generation.

use thiserror::Error;

/// Result type alias using HeightFieldError.
pub type HeightFieldResult<T> = Result<T, HeightFieldError>;

/// Input validation failures. All of them are raised before any cell is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeightFieldError {
    #[error("Invalid dimension '{axis}': {value} (must be at least 1)")]
    InvalidDimension { axis: &'static str, value: usize },

    #[error("Grid of {size_x}x{size_z} cells is too large")]
    GridTooLarge { size_x: usize, size_z: usize },

    #[error(
        "Mismatched wave source inputs: {x_positions} x positions, \
         {z_positions} z positions, {amplitudes} amplitudes"
    )]
    MismatchedSources {
        x_positions: usize,
        z_positions: usize,
        amplitudes: usize,
    },
}

impl HeightFieldError {
    /// Name of the input that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            HeightFieldError::InvalidDimension { axis, .. } => axis,
            HeightFieldError::GridTooLarge { .. } => "size",
            HeightFieldError::MismatchedSources { .. } => "sources",
        }
    }
}

//! Error types for heatmap chart descriptions.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("Series shape mismatch: {columns}x{rows} grid with {values} values")]
    ShapeMismatch {
        columns: usize,
        rows: usize,
        values: usize,
    },

    #[error("Series has {count} non-finite values, first at index {first_index}")]
    NonFiniteValues { count: usize, first_index: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

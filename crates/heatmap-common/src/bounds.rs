//! Placement of a heatmap in chart coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// A point in the chart's axis coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The two corners a heatmap grid is stretched between.
///
/// `start` holds the first column/row, `end` the far edge. `end` may lie below
/// or left of `start` to flip the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapBounds {
    pub start: Point,
    pub end: Point,
}

impl HeatmapBounds {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Signed extent along X.
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Signed extent along Y.
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        let coords = [self.start.x, self.start.y, self.end.x, self.end.y];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(HeatmapError::InvalidBounds(format!(
                "Coordinates must be finite: {:?}",
                coords
            )));
        }
        if self.width() == 0.0 || self.height() == 0.0 {
            return Err(HeatmapError::InvalidBounds(format!(
                "Degenerate bounds {}x{}",
                self.width(),
                self.height()
            )));
        }
        Ok(())
    }

    /// Axis size of one grid cell for a `columns` by `rows` grid.
    pub fn cell_size(&self, columns: usize, rows: usize) -> (f64, f64) {
        (
            self.width() / columns.max(1) as f64,
            self.height() / rows.max(1) as f64,
        )
    }
}

impl Default for HeatmapBounds {
    fn default() -> Self {
        Self::new(Point::new(10.0, 10.0), Point::new(90.0, 90.0))
    }
}

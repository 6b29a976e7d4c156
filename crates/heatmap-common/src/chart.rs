//! Heatmap series and the chart document that carries it.

use heightfield::{finite_range, HeightField};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bounds::HeatmapBounds;
use crate::error::{HeatmapError, HeatmapResult};
use crate::palette::Palette;

/// A value grid positioned in chart coordinates.
///
/// `values` is row-major: the value of column `c` in row `r` sits at
/// `r * columns + c`. Columns run along the chart's X axis from
/// `bounds.start.x` to `bounds.end.x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSeries {
    pub columns: usize,
    pub rows: usize,
    pub bounds: HeatmapBounds,

    /// Draw cells as flat blocks instead of smoothing between them
    #[serde(default)]
    pub pixelate: bool,

    pub values: Vec<f64>,
}

impl HeatmapSeries {
    /// Take ownership of a generated field. X becomes columns, Z becomes rows.
    pub fn from_field(field: HeightField, bounds: HeatmapBounds) -> Self {
        let columns = field.size_x();
        let rows = field.size_z();
        Self {
            columns,
            rows,
            bounds,
            pixelate: false,
            values: field.into_values(),
        }
    }

    pub fn with_pixelate(mut self, pixelate: bool) -> Self {
        self.pixelate = pixelate;
        self
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        let expected = self.columns.checked_mul(self.rows);
        if self.columns == 0 || self.rows == 0 || expected != Some(self.values.len()) {
            return Err(HeatmapError::ShapeMismatch {
                columns: self.columns,
                rows: self.rows,
                values: self.values.len(),
            });
        }

        // JSON has no NaN or infinity, so such a series cannot be read back
        if let Some(first_index) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(HeatmapError::NonFiniteValues {
                count: self.values.iter().filter(|v| !v.is_finite()).count(),
                first_index,
            });
        }

        self.bounds.validate()
    }

    /// Value at `(column, row)`.
    pub fn value(&self, column: usize, row: usize) -> Option<f64> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.values.get(row * self.columns + column).copied()
    }

    /// Minimum and maximum over finite values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.values)
    }
}

/// Everything a chart needs to show one heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChart {
    pub title: String,
    pub series: HeatmapSeries,
    pub palette: Palette,
}

impl HeatmapChart {
    pub fn new(title: impl Into<String>, series: HeatmapSeries, palette: Palette) -> Self {
        Self {
            title: title.into(),
            series,
            palette,
        }
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        self.series.validate()?;
        self.palette.validate()?;
        debug!(
            columns = self.series.columns,
            rows = self.series.rows,
            steps = self.palette.steps.len(),
            "Heatmap chart validated"
        );
        Ok(())
    }

    /// Whether every finite value falls inside the palette's step span.
    pub fn palette_covers_values(&self) -> bool {
        match (self.series.value_range(), self.palette.value_span()) {
            (Some((lo, hi)), Some((first, last))) => lo >= first && hi <= last,
            (None, _) => true,
            (Some(_), None) => false,
        }
    }

    /// Parse a chart document from JSON.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON, indented when `pretty`.
    pub fn to_json(&self, pretty: bool) -> HeatmapResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

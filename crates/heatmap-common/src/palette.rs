//! Color look-up tables for heatmap series.

use serde::{Deserialize, Serialize};

use crate::color::ColorRgba;
use crate::error::{HeatmapError, HeatmapResult};

/// A look-up table of `(threshold, color)` breakpoints.
///
/// When `interpolate` is false the chart paints each value with the color of
/// the highest step not above it (stepped); when true it blends between
/// neighbouring steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Breakpoints in strictly ascending value order
    pub steps: Vec<PaletteStep>,

    /// Blend between steps instead of stepping
    #[serde(default)]
    pub interpolate: bool,
}

/// A breakpoint in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteStep {
    /// The data value at this step
    pub value: f64,

    /// The color at this step
    pub color: ColorRgba,
}

impl PaletteStep {
    pub fn new(value: f64, color: ColorRgba) -> Self {
        Self { value, color }
    }
}

impl Palette {
    pub fn new(steps: Vec<PaletteStep>, interpolate: bool) -> Self {
        Self { steps, interpolate }
    }

    /// Black through yellow and orange to red over 0..100, stepped.
    pub fn water_drop() -> Self {
        Self::new(
            vec![
                PaletteStep::new(0.0, ColorRgba::BLACK),
                PaletteStep::new(30.0, ColorRgba::YELLOW),
                PaletteStep::new(45.0, ColorRgba::rgb(255, 204, 0)),
                PaletteStep::new(60.0, ColorRgba::rgb(255, 128, 0)),
                PaletteStep::new(100.0, ColorRgba::RED),
            ],
            false,
        )
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if self.steps.is_empty() {
            return Err(HeatmapError::InvalidPalette(
                "Palette must have at least 1 step".to_string(),
            ));
        }

        if let Some(step) = self.steps.iter().find(|s| !s.value.is_finite()) {
            return Err(HeatmapError::InvalidPalette(format!(
                "Step value must be finite, got {}",
                step.value
            )));
        }

        for pair in self.steps.windows(2) {
            if pair[1].value <= pair[0].value {
                return Err(HeatmapError::InvalidPalette(format!(
                    "Steps must be in ascending value order ({} after {})",
                    pair[1].value, pair[0].value
                )));
            }
        }

        Ok(())
    }

    /// Lowest and highest step values.
    pub fn value_span(&self) -> Option<(f64, f64)> {
        Some((self.steps.first()?.value, self.steps.last()?.value))
    }
}

//! Data handed to a heatmap chart: the value grid, its geometry and a
//! color look-up table.
//!
//! Nothing here draws or maps values to colors; the types describe what a
//! chart widget consumes and check that the description is coherent.

pub mod bounds;
pub mod chart;
pub mod color;
pub mod error;
pub mod palette;

pub use bounds::{HeatmapBounds, Point};
pub use chart::{HeatmapChart, HeatmapSeries};
pub use color::ColorRgba;
pub use error::{HeatmapError, HeatmapResult};
pub use palette::{Palette, PaletteStep};

//! Scenario configuration.
//!
//! A scenario is read from YAML; every field falls back to the stock
//! three-drop scene when omitted.

use std::path::Path;

use anyhow::{Context, Result};
use heatmap_common::{HeatmapBounds, Palette};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to generate one heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Grid columns
    #[serde(default = "default_resolution")]
    pub resolution_x: usize,

    /// Grid rows
    #[serde(default = "default_resolution")]
    pub resolution_z: usize,

    #[serde(default)]
    pub drops: DropConfig,

    /// Baseline added to every cell
    #[serde(default = "default_offset_level")]
    pub offset_level: f64,

    /// Wave density; larger values give more rings per drop
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    #[serde(default)]
    pub bounds: HeatmapBounds,

    #[serde(default)]
    pub pixelate: bool,

    #[serde(default = "Palette::water_drop")]
    pub palette: Palette,
}

/// Drop sources as parallel sequences of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropConfig {
    /// Normalized X of each drop (0..1)
    pub x_positions: Vec<f64>,
    /// Normalized Z of each drop (0..1)
    pub z_positions: Vec<f64>,
    pub amplitudes: Vec<f64>,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            x_positions: vec![0.2, 0.5, 0.7],
            z_positions: vec![0.6, 0.5, 0.3],
            amplitudes: vec![15.0, 50.0, 3.0],
        }
    }
}

impl DropConfig {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
}

fn default_title() -> String {
    "Heatmap using IntensityGrid".to_string()
}

fn default_resolution() -> usize {
    200
}

fn default_offset_level() -> f64 {
    47.0
}

fn default_volatility() -> f64 {
    25.0
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            resolution_x: default_resolution(),
            resolution_z: default_resolution(),
            drops: DropConfig::default(),
            offset_level: default_offset_level(),
            volatility: default_volatility(),
            bounds: HeatmapBounds::default(),
            pixelate: false,
            palette: Palette::water_drop(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))?;
        debug!(path = %path.display(), drops = config.drops.len(), "Loaded scenario");
        Ok(config)
    }

    /// Parse a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Use the same number of rows and columns.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution_x = resolution;
        self.resolution_z = resolution;
        self
    }

    /// Check the chart placement and palette.
    ///
    /// Grid dimensions and drop lengths are checked by the generator itself.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate().context("Invalid heatmap bounds")?;
        self.palette.validate().context("Invalid palette")?;
        Ok(())
    }
}

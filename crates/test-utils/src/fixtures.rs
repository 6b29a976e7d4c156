//! Common drop scenarios for height-field tests.

/// A set of drops as the three parallel sequences the generator consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct DropSet {
    pub x_positions: Vec<f64>,
    pub z_positions: Vec<f64>,
    pub amplitudes: Vec<f64>,
}

impl DropSet {
    pub fn new(x_positions: Vec<f64>, z_positions: Vec<f64>, amplitudes: Vec<f64>) -> Self {
        Self {
            x_positions,
            z_positions,
            amplitudes,
        }
    }

    /// No drops at all.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// One drop.
    pub fn single(x: f64, z: f64, amplitude: f64) -> Self {
        Self::new(vec![x], vec![z], vec![amplitude])
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
}

/// The three-drop scene of the demo heatmap.
pub mod water_drop {
    /// Drop X positions in 0..1
    pub const X_POSITIONS: [f64; 3] = [0.2, 0.5, 0.7];

    /// Drop Z positions in 0..1
    pub const Z_POSITIONS: [f64; 3] = [0.6, 0.5, 0.3];

    /// Drop amplitudes
    pub const AMPLITUDES: [f64; 3] = [15.0, 50.0, 3.0];

    /// Baseline added to every cell
    pub const OFFSET_LEVEL: f64 = 47.0;

    /// Wave density
    pub const VOLATILITY: f64 = 25.0;

    /// Square resolution of the demo heatmap
    pub const RESOLUTION: usize = 200;

    pub fn drops() -> super::DropSet {
        super::DropSet::new(
            X_POSITIONS.to_vec(),
            Z_POSITIONS.to_vec(),
            AMPLITUDES.to_vec(),
        )
    }
}

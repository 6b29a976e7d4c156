//! Wave sources ("drops") and their contribution to a sample point.

use crate::error::{HeightFieldError, HeightFieldResult};
use crate::generator::DAMPING;

/// A single damped radial wave emitter in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSource {
    /// Peak contribution at the centre
    pub amplitude: f64,
    /// Normalized X of the centre, usually within [0, 1]
    pub center_x: f64,
    /// Normalized Z of the centre, usually within [0, 1]
    pub center_z: f64,
    /// Weight applied to the amplitude
    pub gain: f64,
}

impl WaveSource {
    /// Create a source with unit gain.
    pub fn new(amplitude: f64, center_x: f64, center_z: f64) -> Self {
        Self {
            amplitude,
            center_x,
            center_z,
            gain: 1.0,
        }
    }

    /// Euclidean distance from the centre to `(x, z)`.
    pub fn distance_to(&self, x: f64, z: f64) -> f64 {
        let dist_x = x - self.center_x;
        let dist_z = z - self.center_z;
        (dist_x * dist_x + dist_z * dist_z).sqrt()
    }

    /// Wave height this source contributes at `(x, z)`.
    ///
    /// `gain * amplitude * cos(d * volatility) * exp(-d * DAMPING)` where `d`
    /// is the distance to the centre.
    pub fn height_at(&self, x: f64, z: f64, volatility: f64) -> f64 {
        let dist = self.distance_to(x, z);
        self.gain * self.amplitude * (dist * volatility).cos() * (-dist * DAMPING).exp()
    }
}

/// Zip three parallel sequences into wave sources.
///
/// The sequences must have equal length; a mismatch is rejected rather than
/// truncated.
pub fn sources_from_parts(
    x_positions: &[f64],
    z_positions: &[f64],
    amplitudes: &[f64],
) -> HeightFieldResult<Vec<WaveSource>> {
    if x_positions.len() != amplitudes.len() || z_positions.len() != amplitudes.len() {
        return Err(HeightFieldError::MismatchedSources {
            x_positions: x_positions.len(),
            z_positions: z_positions.len(),
            amplitudes: amplitudes.len(),
        });
    }

    Ok(amplitudes
        .iter()
        .zip(x_positions)
        .zip(z_positions)
        .map(|((&amplitude, &x), &z)| WaveSource::new(amplitude, x, z))
        .collect())
}

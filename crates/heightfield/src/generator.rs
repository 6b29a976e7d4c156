//! Water-drop height-field generation.
//!
//! The unit square `[0, 1) x [0, 1)` is sampled on a regular grid with step
//! `1 / size_x` in X and `1 / size_z` in Z. Every cell receives the sum of all
//! wave sources' damped cosines plus a constant offset.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{HeightFieldError, HeightFieldResult};
use crate::field::HeightField;
use crate::source::{sources_from_parts, WaveSource};

/// Exponential decay rate of every wave with distance from its centre.
pub const DAMPING: f64 = 3.0;

/// Generate a water-drop height field, filling rows in parallel.
///
/// # Arguments
/// - `size_x`: Number of columns (X samples), at least 1
/// - `size_z`: Number of rows (Z samples), at least 1
/// - `x_positions`: Normalized X of each drop
/// - `z_positions`: Normalized Z of each drop
/// - `amplitudes`: Amplitude of each drop
/// - `offset_level`: Constant added to every cell
/// - `volatility`: Spatial frequency of the waves; larger values give more
///   rings per drop
///
/// The three per-drop sequences must have the same length. Positions are not
/// clamped, so a drop may sit outside the sampled square.
///
/// # Returns
/// A row-major field of `size_x * size_z` cells. The result is bit-identical
/// to [`generate_sequential`] for the same inputs.
pub fn generate(
    size_x: usize,
    size_z: usize,
    x_positions: &[f64],
    z_positions: &[f64],
    amplitudes: &[f64],
    offset_level: f64,
    volatility: f64,
) -> HeightFieldResult<HeightField> {
    let len = check_dimensions(size_x, size_z)?;
    let sources = sources_from_parts(x_positions, z_positions, amplitudes)?;

    debug!(size_x, size_z, sources = sources.len(), volatility, "Generating height field");

    let mut values = vec![0.0f64; len];
    values
        .par_chunks_mut(size_x)
        .enumerate()
        .for_each(|(row, out)| {
            fill_row(out, row, size_x, size_z, &sources, offset_level, volatility)
        });

    Ok(HeightField::from_raw(size_x, size_z, values))
}

/// Same as [`generate`] but computed on the calling thread.
pub fn generate_sequential(
    size_x: usize,
    size_z: usize,
    x_positions: &[f64],
    z_positions: &[f64],
    amplitudes: &[f64],
    offset_level: f64,
    volatility: f64,
) -> HeightFieldResult<HeightField> {
    let len = check_dimensions(size_x, size_z)?;
    let sources = sources_from_parts(x_positions, z_positions, amplitudes)?;

    debug!(
        size_x,
        size_z,
        sources = sources.len(),
        volatility,
        "Generating height field sequentially"
    );

    let mut values = vec![0.0f64; len];
    for (row, out) in values.chunks_mut(size_x).enumerate() {
        fill_row(out, row, size_x, size_z, &sources, offset_level, volatility);
    }

    Ok(HeightField::from_raw(size_x, size_z, values))
}

/// Validate grid dimensions and return the cell count.
///
/// The buffer must also fit in `isize::MAX` bytes, the allocator's limit.
fn check_dimensions(size_x: usize, size_z: usize) -> HeightFieldResult<usize> {
    if size_x == 0 {
        return Err(HeightFieldError::InvalidDimension {
            axis: "size_x",
            value: size_x,
        });
    }
    if size_z == 0 {
        return Err(HeightFieldError::InvalidDimension {
            axis: "size_z",
            value: size_z,
        });
    }
    size_x
        .checked_mul(size_z)
        .filter(|len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(HeightFieldError::GridTooLarge { size_x, size_z })
}

fn fill_row(
    out: &mut [f64],
    row: usize,
    size_x: usize,
    size_z: usize,
    sources: &[WaveSource],
    offset_level: f64,
    volatility: f64,
) {
    let step_x = 1.0 / size_x as f64;
    let z = row as f64 * (1.0 / size_z as f64);

    for (col, cell) in out.iter_mut().enumerate() {
        let x = col as f64 * step_x;
        *cell = waves_at_point(sources, x, z, volatility) + offset_level;
    }
}

fn waves_at_point(sources: &[WaveSource], x: f64, z: f64, volatility: f64) -> f64 {
    sources
        .iter()
        .fold(0.0, |acc, source| acc + source.height_at(x, z, volatility))
}

//! The generated height field.

use serde::Serialize;

/// A `size_x` by `size_z` grid of heights.
///
/// Values are stored row-major in one contiguous buffer: column `col` (X) of
/// row `row` (Z) lives at `row * size_x + col`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeightField {
    size_x: usize,
    size_z: usize,
    values: Vec<f64>,
}

impl HeightField {
    pub(crate) fn from_raw(size_x: usize, size_z: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), size_x * size_z);
        Self {
            size_x,
            size_z,
            values,
        }
    }

    /// Number of columns.
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Number of rows.
    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the field holds no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat index of a cell, or `None` when out of range.
    pub fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.size_x || row >= self.size_z {
            return None;
        }
        Some(row * self.size_x + col)
    }

    /// Value at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        self.index(col, row).map(|idx| self.values[idx])
    }

    /// One row of values (constant Z), ordered by column.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.size_z {
            return None;
        }
        let start = row * self.size_x;
        Some(&self.values[start..start + self.size_x])
    }

    /// Iterate rows in ascending Z order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.size_x)
    }

    /// Normalized sample coordinates `(x, z)` of a cell.
    pub fn sample_point(&self, col: usize, row: usize) -> Option<(f64, f64)> {
        self.index(col, row)?;
        Some((
            col as f64 * (1.0 / self.size_x as f64),
            row as f64 * (1.0 / self.size_z as f64),
        ))
    }

    /// The flat row-major buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Minimum and maximum over finite cells, `None` if no cell is finite.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(&self.values)
    }
}

/// Minimum and maximum over the finite entries of `values`.
pub fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

//! Shared test utilities for the water-drop heatmap workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate float assertions
//! - Drop scenarios used across crates
//! - Seeded random drop generators
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Assert that two `f64` values differ by at most `epsilon`.
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(field.get(0, 0).unwrap(), 47.0, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that every value of a slice is within epsilon of `expected`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_all_approx_eq;
///
/// assert_all_approx_eq!(&[47.0, 47.0000001], 47.0, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_all_approx_eq {
    ($values:expr, $expected:expr, $epsilon:expr) => {{
        for (idx, value) in $values.iter().enumerate() {
            let value: f64 = *value as f64;
            let expected: f64 = $expected as f64;
            let epsilon: f64 = $epsilon as f64;
            if (value - expected).abs() > epsilon {
                panic!(
                    "assertion failed at index {}: `{:?}` differs from `{:?}` by more than `{:?}`",
                    idx, value, expected, epsilon
                );
            }
        }
    }};
}

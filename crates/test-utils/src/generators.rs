//! Seeded random drop generators.
//!
//! Every generator takes an explicit seed so failures are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fixtures::DropSet;

/// Creates `count` drops with positions in `[0, 1)` and amplitudes in `[-50, 50)`.
///
/// # Example
///
/// ```
/// use test_utils::random_drops;
///
/// let a = random_drops(5, 42);
/// let b = random_drops(5, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 5);
/// ```
pub fn random_drops(count: usize, seed: u64) -> DropSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut drops = DropSet::empty();
    for _ in 0..count {
        drops.x_positions.push(rng.gen_range(0.0..1.0));
        drops.z_positions.push(rng.gen_range(0.0..1.0));
        drops.amplitudes.push(rng.gen_range(-50.0..50.0));
    }
    drops
}

/// Like [`random_drops`] but positions spill outside the unit square.
pub fn random_drops_unbounded(count: usize, seed: u64) -> DropSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut drops = DropSet::empty();
    for _ in 0..count {
        drops.x_positions.push(rng.gen_range(-1.0..2.0));
        drops.z_positions.push(rng.gen_range(-1.0..2.0));
        drops.amplitudes.push(rng.gen_range(-50.0..50.0));
    }
    drops
}

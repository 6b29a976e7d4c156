//! Procedural height fields built from superposed "water drop" waves.
//!
//! Each drop is a damped radial cosine centred somewhere in the unit square.
//! The generator samples that square on a regular grid and sums every drop's
//! contribution at each sample point, plus a constant offset.
//!
//! ```
//! use heightfield::generate;
//!
//! let field = generate(4, 4, &[], &[], &[], 47.0, 25.0).unwrap();
//! assert_eq!(field.len(), 16);
//! assert!(field.values().iter().all(|&v| v == 47.0));
//! ```

pub mod error;
pub mod field;
pub mod generator;
pub mod source;

pub use error::{HeightFieldError, HeightFieldResult};
pub use field::{finite_range, HeightField};
pub use generator::{generate, generate_sequential, DAMPING};
pub use source::{sources_from_parts, WaveSource};

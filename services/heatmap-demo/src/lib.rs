//! Water-drop heatmap demo.
//!
//! Loads a drop scenario, generates its height field and wraps it in a
//! heatmap chart document ready for a charting front end.

pub mod config;
pub mod scenario;

pub use config::{DropConfig, ScenarioConfig};
pub use scenario::{build_chart, write_chart};

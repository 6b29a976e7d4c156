//! Water-drop heatmap demo.
//!
//! Generates a height field from a handful of drops and prints the heatmap
//! chart document (grid, bounds and palette) as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap_demo::{build_chart, write_chart, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "heatmap-demo")]
#[command(about = "Generate a water-drop heatmap chart document")]
struct Args {
    /// Scenario YAML file (default: built-in three-drop scene)
    #[arg(short, long, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Square grid resolution, overrides the scenario
    #[arg(short, long)]
    resolution: Option<usize>,

    /// Offset level, overrides the scenario
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,

    /// Volatility, overrides the scenario
    #[arg(long, allow_hyphen_values = true)]
    volatility: Option<f64>,

    /// Output file (default: stdout)
    #[arg(short, long, env = "HEATMAP_OUTPUT")]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Generate on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Log level
    #[arg(long, env = "HEATMAP_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout carries only the chart
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    info!("Starting heatmap demo");

    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_file(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(resolution) = args.resolution {
        config = config.with_resolution(resolution);
    }
    if let Some(offset) = args.offset {
        config.offset_level = offset;
    }
    if let Some(volatility) = args.volatility {
        config.volatility = volatility;
    }

    info!(
        title = %config.title,
        columns = config.resolution_x,
        rows = config.resolution_z,
        drops = config.drops.len(),
        "Loaded scenario"
    );

    let chart = build_chart(&config, !args.sequential)?;
    write_chart(&chart, args.output.as_deref(), !args.compact)?;

    info!("Heatmap demo complete");
    Ok(())
}

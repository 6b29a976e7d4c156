//! Turn a scenario into a heatmap chart document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use heatmap_common::{HeatmapChart, HeatmapSeries};
use heightfield::{generate, generate_sequential, HeightField, HeightFieldResult};
use tracing::{info, warn};

use crate::config::ScenarioConfig;

type GenerateFn =
    fn(usize, usize, &[f64], &[f64], &[f64], f64, f64) -> HeightFieldResult<HeightField>;

/// Generate the scenario's height field and attach it to a chart.
///
/// `parallel` selects the rayon-backed generator; both paths give identical
/// values.
pub fn build_chart(config: &ScenarioConfig, parallel: bool) -> Result<HeatmapChart> {
    config.validate()?;

    let generator: GenerateFn = if parallel {
        generate
    } else {
        generate_sequential
    };
    let drops = &config.drops;
    let field = generator(
        config.resolution_x,
        config.resolution_z,
        &drops.x_positions,
        &drops.z_positions,
        &drops.amplitudes,
        config.offset_level,
        config.volatility,
    )
    .context("Failed to generate height field")?;

    if let Some((min, max)) = field.value_range() {
        info!(
            columns = field.size_x(),
            rows = field.size_z(),
            drops = drops.len(),
            min,
            max,
            "Generated height field"
        );
    }

    let series = HeatmapSeries::from_field(field, config.bounds).with_pixelate(config.pixelate);
    let chart = HeatmapChart::new(config.title.clone(), series, config.palette.clone());
    chart.validate().context("Generated chart is inconsistent")?;

    if !chart.palette_covers_values() {
        warn!(
            palette_span = ?chart.palette.value_span(),
            range = ?chart.series.value_range(),
            "Heatmap values fall outside the palette steps"
        );
    }

    Ok(chart)
}

/// Write the chart as JSON to `output`, or stdout when `None`.
pub fn write_chart(chart: &HeatmapChart, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = chart.to_json(pretty)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(json.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            info!(path = %path.display(), bytes = json.len(), "Wrote heatmap chart");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(json.as_bytes())?;
            handle.write_all(b"\n")?;
            handle.flush()?;
        }
    }

    Ok(())
}

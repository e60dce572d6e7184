use crate::config::BmicalConfig;
use crate::core::{evaluate, normalize, BmiReport, HeightUnit, Measurement};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Inputs for a single calculation, straight from the CLI.
pub struct CalculateConfig {
    pub weight_kg: f64,
    pub height_raw: f64,
    pub unit: Option<HeightUnit>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub config_path: Option<PathBuf>,
}

pub fn run_calculate(config: CalculateConfig) -> Result<()> {
    let settings = BmicalConfig::load(config.config_path.as_deref())?;

    validate_positive(config.weight_kg, "weight")?;
    validate_positive(config.height_raw, "height")?;

    let unit = settings.resolve_unit(config.unit)?;
    let format = settings.resolve_format(config.format)?;
    let formatting = FormattingConfig::new(settings.resolve_color(config.plain)?);

    let measurement = Measurement {
        weight_kg: config.weight_kg,
        height_raw: config.height_raw,
        unit,
    };
    let height_meters = normalize(measurement.height_raw, measurement.unit);
    let result = evaluate(measurement.weight_kg, height_meters)?;

    log::debug!(
        "evaluated {:.3} kg at {:.3} {} -> bmi {:.3} ({:?})",
        measurement.weight_kg,
        measurement.height_raw,
        measurement.unit,
        result.value,
        result.band
    );

    let report = BmiReport::new(measurement, height_meters, result);
    let mut writer = create_writer(format, config.output.as_deref(), formatting)?;
    writer.write_report(&report)
}

// Rejects zero, negatives, and NaN before anything reaches the core.
fn validate_positive(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{name} must be a positive number, got {value}");
    }
    Ok(())
}

//! Shared "fit pipeline" logic used by every command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load samples -> fit -> exports
//!
//! The command handlers can then focus on presentation.

use tracing::{debug, info};

use crate::domain::{DataSource, FitConfig, FitResult};
use crate::error::AppError;
use crate::fit::{Comparison, compare_degrees, fit};
use crate::io::load_samples;

/// Load the configured data, fit it, and write any requested exports.
pub fn run_fit(config: &FitConfig) -> Result<FitResult, AppError> {
    let samples = load_samples(&config.source)?;
    debug!(n = samples.len(), method = config.degree.display_name(), "samples loaded");

    let fit = fit(&samples, config.degree)?;
    info!(
        degree = fit.degree.value(),
        sse = fit.quality.sse,
        rmse = fit.quality.rmse,
        "fit complete"
    );

    write_exports(config, &fit)?;

    Ok(fit)
}

/// Load the data and fit every degree.
pub fn run_compare(source: &DataSource) -> Result<Comparison, AppError> {
    let samples = load_samples(source)?;
    let comparison = compare_degrees(&samples)?;
    info!(
        fitted = comparison.fits.len(),
        skipped = comparison.skipped.len(),
        "comparison complete"
    );
    Ok(comparison)
}

fn write_exports(config: &FitConfig, fit: &FitResult) -> Result<(), AppError> {
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, fit)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::curve::write_curve_json(path, fit, config.curve_points)?;
    }
    if let Some(path) = &config.export_svg {
        crate::plot::svg::write_svg_chart(path, fit, config.curve_points)?;
    }
    Ok(())
}

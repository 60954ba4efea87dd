//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fitted polynomial:
//! - degree + coefficients (highest power first)
//! - fit diagnostics and a timestamp
//! - a precomputed fitted grid for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::domain::{CurveFile, CurveGrid, Degree, FitResult};
use crate::error::AppError;
use crate::models::evaluate_range;
use crate::report::format_equation;

/// Build the curve file contents for a fit, sampling `n_points` over the data's x range.
pub fn build_curve_file(fit: &FitResult, n_points: usize) -> CurveFile {
    let (x_min, x_max) = fit.x_range();
    let (x, y) = evaluate_range(&fit.coefficients, x_min, x_max, n_points);

    CurveFile {
        tool: "lsq".to_string(),
        fitted_at: Utc::now(),
        degree: fit.degree,
        coefficients: fit.coefficients.clone(),
        equation: format_equation(&fit.coefficients),
        fit_quality: fit.quality.clone(),
        x_min,
        x_max,
        grid: CurveGrid { x, y },
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, fit: &FitResult, n_points: usize) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    let curve = build_curve_file(fit, n_points);
    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    info!(path = %path.display(), points = curve.grid.x.len(), "wrote curve JSON");
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    validate_curve(&curve)?;
    Ok(curve)
}

fn validate_curve(curve: &CurveFile) -> Result<(), AppError> {
    if Degree::from_coeff_len(curve.coefficients.len()) != Some(curve.degree) {
        return Err(AppError::new(
            2,
            format!(
                "Invalid curve JSON: degree {} needs {} coefficients, found {}",
                curve.degree.value(),
                curve.degree.coeff_len(),
                curve.coefficients.len()
            ),
        ));
    }
    if !(curve.x_min.is_finite() && curve.x_max.is_finite() && curve.x_min <= curve.x_max) {
        return Err(AppError::new(
            2,
            format!(
                "Invalid curve JSON: bad x range [{}, {}]",
                curve.x_min, curve.x_max
            ),
        ));
    }
    if curve.grid.x.len() != curve.grid.y.len() {
        return Err(AppError::new(2, "Invalid curve JSON: grid x and y lengths differ"));
    }
    Ok(())
}

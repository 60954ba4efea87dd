//! Export per-sample results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::FitResult;
use crate::error::AppError;

/// Write per-sample results to a CSV file.
pub fn write_results_csv(path: &Path, fit: &FitResult) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(&mut file, fit)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))?;

    info!(path = %path.display(), rows = fit.samples.len(), "wrote results CSV");
    Ok(())
}

fn write_results<W: Write>(out: &mut W, fit: &FitResult) -> std::io::Result<()> {
    writeln!(out, "x,y_obs,y_pred,residual")?;
    for ((s, y_pred), residual) in fit.samples.iter().zip(&fit.predicted).zip(&fit.residuals) {
        writeln!(out, "{:.10},{:.10},{:.10},{:.10}", s.x, s.y, y_pred, residual)?;
    }
    Ok(())
}

//! Fit every supported degree and report them side by side.
//!
//! Degrees that need more samples than are available are skipped with a
//! reason rather than failing the whole comparison.

use rayon::prelude::*;

use crate::domain::{Degree, FitResult, Sample};
use crate::error::FitError;
use crate::fit::fitter::fit;

/// Output of fitting all degrees.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Successful fits, ordered by degree.
    pub fits: Vec<FitResult>,
    /// Degrees that were skipped and why (for diagnostics).
    pub skipped: Vec<(Degree, String)>,
}

impl Comparison {
    /// The fit with the lowest RMSE (ties go to the lower degree).
    pub fn lowest_rmse(&self) -> Option<&FitResult> {
        self.fits.iter().reduce(|best, f| {
            if f.quality.rmse < best.quality.rmse { f } else { best }
        })
    }
}

/// Fit degrees 1..=3 independently.
pub fn compare_degrees(samples: &[Sample]) -> Result<Comparison, FitError> {
    if samples.is_empty() {
        return Err(FitError::EmptyInput("samples"));
    }

    // Each fit only reads the shared samples.
    let outcomes: Vec<(Degree, Result<FitResult, FitError>)> = Degree::ALL
        .par_iter()
        .map(|&degree| (degree, fit(samples, degree)))
        .collect();

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    for (degree, outcome) in outcomes {
        match outcome {
            Ok(f) => fits.push(f),
            Err(err @ FitError::UnderdeterminedFit { .. }) => {
                skipped.push((degree, err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }

    if fits.is_empty() {
        return Err(FitError::UnderdeterminedFit {
            degree: Degree::Linear.value(),
            required: Degree::Linear.coeff_len(),
            n: samples.len(),
        });
    }

    Ok(Comparison { fits, skipped })
}

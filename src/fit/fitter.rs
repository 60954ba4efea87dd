//! Least-squares polynomial fit for a single degree.
//!
//! Given samples `(x_i, y_i)` and a degree `d` we:
//! - build the design matrix with rows `[x_i^d, ..., x_i, 1]`
//! - solve the OLS problem for the coefficients (SVD)
//! - evaluate the polynomial at each `x_i` for predictions and residuals
//!
//! Each call is pure and recomputes everything from its inputs.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

use crate::domain::{Degree, FitQuality, FitResult, Sample};
use crate::error::FitError;
use crate::math::solve_least_squares;
use crate::models::{fill_design_row, predict};

/// Fit a polynomial of the given degree to the samples.
pub fn fit(samples: &[Sample], degree: Degree) -> Result<FitResult, FitError> {
    if samples.is_empty() {
        return Err(FitError::EmptyInput("samples"));
    }

    let n = samples.len();
    let p = degree.coeff_len();
    if n < p {
        return Err(FitError::UnderdeterminedFit {
            degree: degree.value(),
            required: p,
            n,
        });
    }
    if samples.iter().any(|s| !(s.x.is_finite() && s.y.is_finite())) {
        return Err(FitError::Numerical("samples contain non-finite values".to_string()));
    }

    debug!(n, degree = degree.value(), "fitting polynomial");

    let mut x = DMatrix::<f64>::zeros(n, p);
    let mut row = vec![0.0; p];
    for (i, s) in samples.iter().enumerate() {
        fill_design_row(s.x, &mut row);
        for (j, &v) in row.iter().enumerate() {
            x[(i, j)] = v;
        }
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(FitError::Numerical(format!(
            "x^{} overflows for the given x values",
            degree.value()
        )));
    }
    let y = DVector::from_iterator(n, samples.iter().map(|s| s.y));

    let solution = solve_least_squares(&x, &y).ok_or_else(|| {
        FitError::Numerical(format!(
            "least squares solve failed for {} fit",
            degree.display_name()
        ))
    })?;

    if solution.rank < p {
        warn!(
            rank = solution.rank,
            coefficients = p,
            "design matrix is rank deficient; using the minimum-norm solution"
        );
    }

    let coefficients: Vec<f64> = solution.beta.iter().copied().collect();
    let predicted: Vec<f64> = samples.iter().map(|s| predict(&coefficients, s.x)).collect();
    if predicted.iter().any(|v| !v.is_finite()) {
        return Err(FitError::Numerical(
            "non-finite prediction from fitted coefficients".to_string(),
        ));
    }
    let residuals: Vec<f64> = samples
        .iter()
        .zip(&predicted)
        .map(|(s, &y_fit)| s.y - y_fit)
        .collect();

    let quality = fit_quality(samples, &residuals)?;

    Ok(FitResult {
        degree,
        coefficients,
        samples: samples.to_vec(),
        predicted,
        residuals,
        quality,
    })
}

fn fit_quality(samples: &[Sample], residuals: &[f64]) -> Result<FitQuality, FitError> {
    let n = samples.len();
    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    let rmse = (sse / n as f64).sqrt();

    let y_mean = samples.iter().map(|s| s.y).sum::<f64>() / n as f64;
    let sst: f64 = samples.iter().map(|s| (s.y - y_mean).powi(2)).sum();
    if !(sse.is_finite() && sst.is_finite()) {
        return Err(FitError::Numerical(
            "sum of squares overflows for the given y values".to_string(),
        ));
    }
    let r_squared = (sst > 0.0).then(|| 1.0 - sse / sst);

    Ok(FitQuality {
        sse,
        rmse,
        r_squared,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(xs: &[f64], ys: &[f64]) -> Vec<Sample> {
        xs.iter().zip(ys).map(|(&x, &y)| Sample::new(x, y)).collect()
    }

    #[test]
    fn linear_fit_on_reference_data() {
        let s = samples(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
        let fit = fit(&s, Degree::Linear).unwrap();

        assert_eq!(fit.coefficients.len(), 2);
        assert!((fit.coefficients[0] - 0.6).abs() < 1e-10);
        assert!((fit.coefficients[1] - 2.2).abs() < 1e-10);
        assert!((fit.predicted[0] - 2.8).abs() < 1e-10);
        assert!((fit.residuals[0] + 0.8).abs() < 1e-10);
        // SSE = 0.64 + 0.36 + 1.0 + 0.36 + 0.04
        assert!((fit.quality.sse - 2.4).abs() < 1e-10);
        assert!((fit.quality.r_squared.unwrap() - 0.6).abs() < 1e-10);
    }

    #[test]
    fn exact_cubic_is_recovered() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|&x| 0.5 * x * x * x - x * x + 2.0 * x - 3.0).collect();
        let fit = fit(&samples(&xs, &ys), Degree::Cubic).unwrap();

        let expected = [0.5, -1.0, 2.0, -3.0];
        for (c, e) in fit.coefficients.iter().zip(expected) {
            assert!((c - e).abs() < 1e-9, "got {c}, expected {e}");
        }
        assert!(fit.quality.sse < 1e-18);
    }

    #[test]
    fn underdetermined_fit_is_rejected() {
        let s = samples(&[1.0, 2.0], &[1.0, 4.0]);
        let err = fit(&s, Degree::Cubic).unwrap_err();
        assert_eq!(
            err,
            FitError::UnderdeterminedFit {
                degree: 3,
                required: 4,
                n: 2
            }
        );
    }

    #[test]
    fn exactly_determined_quadratic_interpolates() {
        let s = samples(&[0.0, 1.0, 2.0], &[1.0, 0.0, 3.0]);
        let fit = fit(&s, Degree::Quadratic).unwrap();
        assert!(fit.residuals.iter().all(|r| r.abs() < 1e-9));
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert_eq!(fit(&[], Degree::Linear).unwrap_err(), FitError::EmptyInput("samples"));
    }

    #[test]
    fn constant_y_has_no_r_squared() {
        let s = samples(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]);
        let fit = fit(&s, Degree::Linear).unwrap();
        assert!(fit.quality.r_squared.is_none());
        assert!(fit.coefficients[0].abs() < 1e-12);
        assert!((fit.coefficients[1] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_x_still_produces_finite_result() {
        let s = samples(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        let fit = fit(&s, Degree::Linear).unwrap();
        assert!(fit.coefficients.iter().all(|c| c.is_finite()));
        // Best possible prediction at x = 2 is the mean.
        assert!((fit.predicted[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn overflowing_powers_of_x_are_rejected() {
        // x^3 overflows f64, x^2 does not.
        let s = samples(&[1e120, 2e120, 3e120, 4e120], &[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(fit(&s, Degree::Cubic), Err(FitError::Numerical(_))));
        assert!(fit(&s, Degree::Quadratic).is_ok());
    }

    #[test]
    fn overflowing_sum_of_squares_is_rejected() {
        let s = samples(&[1.0, 2.0, 3.0, 4.0], &[1e200, -1e200, 1e200, -1e200]);
        assert!(matches!(fit(&s, Degree::Linear), Err(FitError::Numerical(_))));
    }
}

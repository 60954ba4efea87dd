//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)
//!
//! Coefficients are rounded to 4 decimals for display only; the stored values
//! keep full precision.

use crate::domain::FitResult;
use crate::fit::Comparison;

/// Decimal digits kept when displaying coefficients.
const DISPLAY_DECIMALS: i32 = 4;

const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Plain-text equation, e.g. `0.25*x^3 + -2.5357*x^2 + 8.2143*x + -4.0`.
///
/// Every coefficient gets a term, zeros included.
pub fn format_equation(coefficients: &[f64]) -> String {
    join_terms(coefficients, |c, power| match power {
        0 => c,
        1 => format!("{c}*x"),
        p => format!("{c}*x^{p}"),
    })
}

/// LaTeX equation for the fitted curve, e.g. `\hat{y} = 0.6x + 2.2`.
pub fn format_equation_latex(coefficients: &[f64]) -> String {
    let body = join_terms(coefficients, |c, power| match power {
        0 => c,
        1 => format!("{c}x"),
        p => format!("{c}x^{{{p}}}"),
    });
    format!("\\hat{{y}} = {body}")
}

fn join_terms(coefficients: &[f64], term: impl Fn(String, usize) -> String) -> String {
    let degree = coefficients.len().saturating_sub(1);
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &c)| term(format_coefficient(c), degree - i))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Round to 4 decimals and print in shortest form with at least one decimal.
///
/// Magnitudes from `1e15` up switch to scientific notation (`1.5e20`).
pub fn format_coefficient(c: f64) -> String {
    if c.is_finite() && c.abs() >= SCIENTIFIC_THRESHOLD {
        return format!("{c:e}");
    }
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    let mut r = (c * scale).round() / scale;
    if r == 0.0 {
        // Collapse -0.0.
        r = 0.0;
    }
    if r.is_finite() && r.fract() == 0.0 {
        format!("{r:.1}")
    } else {
        format!("{r}")
    }
}

/// Format the full run summary (dataset range + equation + diagnostics).
pub fn format_run_summary(fit: &FitResult, latex: bool) -> String {
    let mut out = String::new();
    let (x_min, x_max) = fit.x_range();
    let (y_min, y_max) = fit.y_range();

    out.push_str(&format!(
        "=== lsq - {} Least Squares Fitting ===\n",
        fit.degree.display_name()
    ));
    out.push_str(&format!(
        "Samples: n={} | x=[{x_min:.4}, {x_max:.4}] | y=[{y_min:.4}, {y_max:.4}]\n",
        fit.quality.n
    ));

    out.push_str(&format!("\n{} Regression Equation:\n", fit.degree.display_name()));
    out.push_str(&format!("  y = {}\n", format_equation(&fit.coefficients)));
    if latex {
        out.push_str(&format!("  LaTeX: {}\n", format_equation_latex(&fit.coefficients)));
    }

    out.push_str(&format!("\nDiagnostics: {}\n", format_quality(fit)));
    out
}

/// Format the per-sample results table.
pub fn format_residual_table(fit: &FitResult) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>12} {:>12} {:>12} {:>14}",
            "x", "Observed y", "Predicted ŷ", "Error (y - ŷ)"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&format!("{:-<12} {:-<12} {:-<12} {:-<14}\n", "", "", "", ""));

    for ((s, y_pred), residual) in fit.samples.iter().zip(&fit.predicted).zip(&fit.residuals) {
        out.push_str(&format!(
            "{:>12.4} {:>12.4} {:>12.4} {:>14.4}\n",
            s.x, s.y, y_pred, residual
        ));
    }

    out
}

/// Format diagnostics for every fitted degree.
///
/// The degree with the lowest RMSE is marked with `*`.
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let n = comparison.fits.first().map(|f| f.quality.n).unwrap_or(0);
    let best = comparison.lowest_rmse().map(|f| f.degree);

    out.push_str(&format!("Degree diagnostics (n={n}):\n"));
    for fit in &comparison.fits {
        let marker = if Some(fit.degree) == best { "*" } else { " " };
        out.push_str(&format!(
            "{marker} {:<10} {}\n    y = {}\n",
            fit.degree.display_name(),
            format_quality(fit),
            format_equation(&fit.coefficients)
        ));
    }
    for (degree, reason) in &comparison.skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", degree.display_name()));
    }

    out
}

fn format_quality(fit: &FitResult) -> String {
    let r2 = fit
        .quality
        .r_squared
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "SSE={:.4} RMSE={:.4} R²={r2}",
        fit.quality.sse, fit.quality.rmse
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Degree, Sample};
    use crate::fit::{compare_degrees, fit};

    fn reference() -> Vec<Sample> {
        [(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)]
            .into_iter()
            .map(|(x, y)| Sample::new(x, y))
            .collect()
    }

    #[test]
    fn coefficients_round_to_four_decimals() {
        assert_eq!(format_coefficient(0.6), "0.6");
        assert_eq!(format_coefficient(2.0), "2.0");
        assert_eq!(format_coefficient(-2.5357142857), "-2.5357");
        assert_eq!(format_coefficient(8.214285714), "8.2143");
        assert_eq!(format_coefficient(-0.00001), "0.0");
        assert_eq!(format_coefficient(0.0), "0.0");
    }

    #[test]
    fn huge_coefficients_use_scientific_notation() {
        assert_eq!(format_coefficient(1.5e20), "1.5e20");
        assert_eq!(format_coefficient(-2e300), "-2e300");
        assert_eq!(format_coefficient(123456789.0), "123456789.0");
        assert!(format_equation(&[1e-120, -3.25e284]).len() < 40);
    }

    #[test]
    fn equation_has_one_term_per_coefficient() {
        assert_eq!(format_equation(&[0.6, 2.2]), "0.6*x + 2.2");
        assert_eq!(format_equation(&[1.0, 0.0, -3.0]), "1.0*x^2 + 0.0*x + -3.0");
        assert_eq!(
            format_equation(&[0.25, -2.5357142857, 8.214285714, -4.0]),
            "0.25*x^3 + -2.5357*x^2 + 8.2143*x + -4.0"
        );
        assert_eq!(format_equation(&[0.0, 0.0]).split(" + ").count(), 2);
    }

    #[test]
    fn latex_equation() {
        assert_eq!(format_equation_latex(&[0.6, 2.2]), "\\hat{y} = 0.6x + 2.2");
        assert_eq!(
            format_equation_latex(&[1.0, 2.0, 3.0]),
            "\\hat{y} = 1.0x^{2} + 2.0x + 3.0"
        );
    }

    #[test]
    fn residual_table_snapshot() {
        let fit = fit(&reference(), Degree::Linear).unwrap();
        let table = format_residual_table(&fit);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "           x   Observed y  Predicted ŷ  Error (y - ŷ)");
        assert_eq!(lines[2], "      1.0000       2.0000       2.8000        -0.8000");
    }

    #[test]
    fn summary_mentions_equation_and_latex() {
        let fit = fit(&reference(), Degree::Linear).unwrap();
        let summary = format_run_summary(&fit, true);
        assert!(summary.contains("=== lsq - Linear Least Squares Fitting ==="));
        assert!(summary.contains("y = 0.6*x + 2.2"));
        assert!(summary.contains("LaTeX: \\hat{y} = 0.6x + 2.2"));
        assert!(summary.contains("R²=0.6000"));
    }

    #[test]
    fn comparison_marks_lowest_rmse() {
        let cmp = compare_degrees(&reference()).unwrap();
        let text = format_comparison(&cmp);
        assert!(text.starts_with("Degree diagnostics (n=5):\n"));
        assert!(text.contains("* Cubic"));
        assert!(text.contains("  Linear"));
    }
}

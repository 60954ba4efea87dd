//! Polynomial evaluation.
//!
//! The fitter relies on two primitive operations:
//! - build a design row for a given x (for OLS)
//! - predict y(x) given coefficients (for residuals/plots)
//!
//! Coefficients are always ordered highest power first.

/// Default number of points sampled along a fitted curve.
pub const DEFAULT_CURVE_POINTS: usize = 300;

/// Fill a design row `[x^d, x^(d-1), ..., x, 1]`.
///
/// The polynomial degree is `out.len() - 1`.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    let mut power = 1.0;
    for slot in out.iter_mut().rev() {
        *slot = power;
        power *= x;
    }
}

/// Evaluate the polynomial at `x` (Horner's scheme).
pub fn predict(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evenly spaced samples of the polynomial over `[x_min, x_max]`, endpoints included.
///
/// `n_points == 1` yields just `x_min`; the last x is exactly `x_max`.
pub fn evaluate_range(
    coefficients: &[f64],
    x_min: f64,
    x_max: f64,
    n_points: usize,
) -> (Vec<f64>, Vec<f64>) {
    let xs = linspace(x_min, x_max, n_points);
    let ys = xs.iter().map(|&x| predict(coefficients, x)).collect();
    (xs, ys)
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            xs[n - 1] = end;
            xs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_row_is_highest_power_first() {
        let mut row = [0.0; 4];
        fill_design_row(2.0, &mut row);
        assert_eq!(row, [8.0, 4.0, 2.0, 1.0]);

        let mut linear = [0.0; 2];
        fill_design_row(-3.0, &mut linear);
        assert_eq!(linear, [-3.0, 1.0]);
    }

    #[test]
    fn predict_matches_expanded_form() {
        // 2x^3 - x^2 + 0.5x + 4
        let c = [2.0, -1.0, 0.5, 4.0];
        for &x in &[-2.0, 0.0, 1.5, 3.0] {
            let expected = 2.0 * x * x * x - x * x + 0.5 * x + 4.0;
            assert!((predict(&c, x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn evaluate_range_spans_endpoints() {
        let (xs, ys) = evaluate_range(&[1.0, 0.0], 1.0, 5.0, DEFAULT_CURVE_POINTS);
        assert_eq!(xs.len(), 300);
        assert_eq!(ys.len(), 300);
        assert_eq!(xs[0], 1.0);
        assert_eq!(xs[299], 5.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(xs, ys);
    }

    #[test]
    fn evaluate_range_small_counts() {
        let (xs, ys) = evaluate_range(&[3.0], 0.0, 1.0, 0);
        assert!(xs.is_empty() && ys.is_empty());

        let (xs, ys) = evaluate_range(&[1.0, 1.0], 2.0, 9.0, 1);
        assert_eq!(xs, vec![2.0]);
        assert_eq!(ys, vec![3.0]);

        let (xs, _) = evaluate_range(&[1.0, 0.0], 0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}

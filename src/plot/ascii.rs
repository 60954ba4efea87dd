//! Character-grid plots for the terminal.
//!
//! The grid has a fixed size and no axes, so output is stable enough to
//! compare against golden strings. Observed samples are drawn as `o` on top
//! of the fitted curve (`-`).

use crate::domain::{CurveFile, FitResult, Sample};
use crate::models::evaluate_range;

/// Render a plot for an in-memory fit result.
pub fn render_ascii_plot(fit: &FitResult, width: usize, height: usize) -> String {
    let (x_min, x_max) = widen_if_degenerate(fit.x_range());
    let (xs, ys) = evaluate_range(&fit.coefficients, x_min, x_max, width.max(2));
    let curve: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();
    render_plot(&fit.samples, Some(&curve), x_min, x_max, width, height)
}

/// Render a plot from a saved curve JSON file (curve only, no overlay points).
///
/// Uses the stored grid when present, otherwise re-samples the coefficients
/// over the stored x range.
pub fn render_ascii_plot_from_curve(curve: &CurveFile, width: usize, height: usize) -> String {
    let (x_min, x_max) = widen_if_degenerate((curve.x_min, curve.x_max));
    let curve_points: Vec<(f64, f64)> = if curve.grid.x.is_empty() {
        let (xs, ys) = evaluate_range(&curve.coefficients, x_min, x_max, width.max(2));
        xs.into_iter().zip(ys).collect()
    } else {
        curve
            .grid
            .x
            .iter()
            .zip(curve.grid.y.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    };

    render_plot(&[], Some(&curve_points), x_min, x_max, width, height)
}

fn render_plot(
    samples: &[Sample],
    curve_points: Option<&[(f64, f64)]>,
    x_min: f64,
    x_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    // y range spans both the samples and the curve.
    let (y_min, y_max) = y_range(samples, curve_points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curve first; samples overwrite it.
    if let Some(curve) = curve_points {
        draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);
    }

    for s in samples {
        let x = map_x(s.x, x_min, x_max, width);
        let y = map_y(s.y, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    // Header line carries the plotted ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// A single distinct x has no span to draw over; open it up by one unit each side.
fn widen_if_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo { (lo, hi) } else { (lo - 1.0, hi + 1.0) }
}

fn y_range(samples: &[Sample], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for s in samples {
        min_y = min_y.min(s.y);
        max_y = max_y.max(s.y);
    }
    if let Some(curve) = curve {
        for &(_, y) in curve {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if !(min_y.is_finite() && max_y.is_finite()) {
        None
    } else if max_y > min_y {
        Some((min_y, max_y))
    } else {
        // Flat data: center it vertically.
        Some((min_y - 1.0, max_y + 1.0))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if curve.len() < 2 || width == 0 {
        return;
    }

    // Consecutive finite points are joined; a non-finite y breaks the curve.
    let mut last: Option<(usize, usize)> = None;
    for &(x, y) in curve {
        if !y.is_finite() {
            last = None;
            continue;
        }
        let cell = (map_x(x, x_min, x_max, width), map_y(y, y_min, y_max, height));
        connect(grid, last.unwrap_or(cell), cell, '-');
        last = Some(cell);
    }
}

/// Mark every cell on the segment `from -> to` that is still blank.
fn connect(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize), ch: char) {
    let (c0, r0) = (from.0 as f64, from.1 as f64);
    let (c1, r1) = (to.0 as f64, to.1 as f64);
    let steps = from.0.abs_diff(to.0).max(from.1.abs_diff(to.1)).max(1);

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let col = (c0 + (c1 - c0) * t).round() as usize;
        let row = (r0 + (r1 - r0) * t).round() as usize;
        if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            if *cell == ' ' {
                *cell = ch;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurveGrid, Degree, FitQuality};

    fn flat_fit() -> FitResult {
        FitResult {
            degree: Degree::Linear,
            coefficients: vec![0.0, 1.0],
            samples: vec![Sample::new(0.0, 1.0), Sample::new(9.0, 2.0)],
            predicted: vec![1.0, 1.0],
            residuals: vec![0.0, 1.0],
            quality: FitQuality { sse: 1.0, rmse: 0.5f64.sqrt(), r_squared: Some(0.0), n: 2 },
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let txt = render_ascii_plot(&flat_fit(), 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 9.000] | y=[0.950, 2.050]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    fn line_curve(grid: CurveGrid) -> CurveFile {
        CurveFile {
            tool: "lsq".to_string(),
            fitted_at: chrono::Utc::now(),
            degree: Degree::Linear,
            coefficients: vec![1.0, 0.0],
            equation: "1.0*x + 0.0".to_string(),
            fit_quality: FitQuality { sse: 0.0, rmse: 0.0, r_squared: Some(1.0), n: 2 },
            x_min: 0.0,
            x_max: 3.0,
            grid,
        }
    }

    #[test]
    fn curve_only_plot_has_requested_size() {
        let curve = line_curve(CurveGrid {
            x: vec![0.0, 1.0, 2.0, 3.0],
            y: vec![0.0, 1.0, 2.0, 3.0],
        });
        let txt = render_ascii_plot_from_curve(&curve, 20, 8);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 20));
        assert!(!txt.contains('o'));
        assert!(txt.contains('-'));
    }

    #[test]
    fn empty_grid_is_resampled_from_coefficients() {
        let curve = line_curve(CurveGrid { x: vec![], y: vec![] });
        let txt = render_ascii_plot_from_curve(&curve, 10, 5);
        assert!(txt.starts_with("Plot: x=[0.000, 3.000]"));
        let rows: Vec<&str> = txt.lines().skip(1).collect();
        // y = x rises from the bottom-left to the top-right corner.
        assert!(rows[4].starts_with('-'));
        assert!(rows[0].ends_with('-'));
    }

    #[test]
    fn single_x_value_does_not_panic() {
        let mut fit = flat_fit();
        fit.samples = vec![Sample::new(3.0, 1.0), Sample::new(3.0, 2.0)];
        let txt = render_ascii_plot(&fit, 12, 6);
        assert!(txt.starts_with("Plot: x=[2.000, 4.000]"));
    }
}

//! SVG chart export (Plotters).
//!
//! Draws the observed samples as a scatter and the fitted polynomial as a
//! line over the data's x range, with axis labels and a legend.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::domain::FitResult;
use crate::error::AppError;
use crate::models::evaluate_range;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Axis bounds and sampled curve for a fit, padded for display.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub curve: Vec<(f64, f64)>,
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Build chart series from a fit, sampling `n_points` along the curve.
pub fn chart_data(fit: &FitResult, n_points: usize) -> ChartData {
    let (x_min, x_max) = fit.x_range();
    let (xs, ys) = evaluate_range(&fit.coefficients, x_min, x_max, n_points);
    let curve: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();
    let points: Vec<(f64, f64)> = fit.samples.iter().map(|s| (s.x, s.y)).collect();

    let x_bounds = padded([x_min, x_max]);

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in points.iter().chain(curve.iter()) {
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let y_bounds = padded([y_min, y_max]);

    ChartData {
        curve,
        points,
        x_bounds,
        y_bounds,
    }
}

fn padded([lo, hi]: [f64; 2]) -> [f64; 2] {
    if !(lo.is_finite() && hi.is_finite()) {
        return [0.0, 1.0];
    }
    if hi <= lo {
        return [lo - 1.0, hi + 1.0];
    }
    let pad = (hi - lo) * 0.05;
    [lo - pad, hi + pad]
}

/// Write the scatter + fitted curve chart to an SVG file.
pub fn write_svg_chart(path: &Path, fit: &FitResult, n_points: usize) -> Result<(), AppError> {
    let data = chart_data(fit, n_points);
    let title = format!("{} Least Squares Fitting", fit.degree.display_name());

    draw_chart(path, &data, &title)
        .map_err(|e| AppError::new(4, format!("Failed to render SVG chart '{}': {e}", path.display())))?;

    info!(path = %path.display(), "wrote SVG chart");
    Ok(())
}

fn draw_chart(path: &Path, data: &ChartData, title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let [x0, x1] = data.x_bounds;
    let [y0, y1] = data.y_bounds;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart.configure_mesh().x_desc("X").y_desc("Y").draw()?;

    let sky = RGBColor(0, 191, 255);
    let orange = RGBColor(255, 165, 0);

    chart
        .draw_series(
            data.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, sky.filled())),
        )?
        .label("Observed y")
        .legend(move |(x, y)| Circle::new((x, y), 4, sky.filled()));

    chart
        .draw_series(LineSeries::new(data.curve.iter().copied(), &orange))?
        .label("Fitted Curve")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &orange));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

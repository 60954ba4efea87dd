//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One observation: `x[i]` paired with `y[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Polynomial degree, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    #[value(alias = "1")]
    Linear,
    #[value(alias = "2")]
    Quadratic,
    #[value(alias = "3")]
    Cubic,
}

impl Degree {
    pub const ALL: [Degree; 3] = [Degree::Linear, Degree::Quadratic, Degree::Cubic];

    /// Highest power of x in the fitted polynomial.
    pub fn value(self) -> usize {
        match self {
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
        }
    }

    /// Number of coefficients (`degree + 1`).
    pub fn coeff_len(self) -> usize {
        self.value() + 1
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Degree::Linear => "Linear",
            Degree::Quadratic => "Quadratic",
            Degree::Cubic => "Cubic",
        }
    }

    pub fn from_value(value: usize) -> Option<Self> {
        match value {
            1 => Some(Degree::Linear),
            2 => Some(Degree::Quadratic),
            3 => Some(Degree::Cubic),
            _ => None,
        }
    }

    /// The degree implied by a coefficient vector, if it has 2–4 entries.
    pub fn from_coeff_len(len: usize) -> Option<Self> {
        len.checked_sub(1).and_then(Self::from_value)
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    /// Sum of squared residuals.
    pub sse: f64,
    pub rmse: f64,
    /// Coefficient of determination; `None` when y is constant.
    pub r_squared: Option<f64>,
    pub n: usize,
}

/// Output of a single least-squares fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub degree: Degree,
    /// Highest power first; `coefficients[degree]` is the constant term.
    pub coefficients: Vec<f64>,
    pub samples: Vec<Sample>,
    /// Fitted polynomial evaluated at each sample's x.
    pub predicted: Vec<f64>,
    /// `y - predicted` per sample.
    pub residuals: Vec<f64>,
    pub quality: FitQuality,
}

impl FitResult {
    /// Smallest and largest sample x.
    pub fn x_range(&self) -> (f64, f64) {
        min_max(self.samples.iter().map(|s| s.x))
    }

    /// Smallest and largest observed y.
    pub fn y_range(&self) -> (f64, f64) {
        min_max(self.samples.iter().map(|s| s.y))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Where the samples come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Two comma-separated lists.
    Inline { x: String, y: String },
    /// A CSV file with `x` and `y` columns.
    Csv(PathBuf),
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub source: DataSource,
    pub degree: Degree,
    /// Number of points sampled along the fitted curve.
    pub curve_points: usize,
    pub latex: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
    pub export_svg: Option<PathBuf>,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub fitted_at: DateTime<Utc>,
    pub degree: Degree,
    pub coefficients: Vec<f64>,
    pub equation: String,
    pub fit_quality: FitQuality,
    /// Sample x range the curve was fitted over.
    pub x_min: f64,
    pub x_max: f64,
    pub grid: CurveGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

//! Command-line parsing for the least squares curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Degree;
use crate::models::DEFAULT_CURVE_POINTS;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lsq", version, about = "Least squares polynomial curve fitter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a polynomial, print the equation and residual table, and optionally plot/export.
    Fit(FitArgs),
    /// Fit every degree (linear, quadratic, cubic) and compare diagnostics.
    Compare(DataArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Where the x/y data comes from.
#[derive(Debug, Args, Clone)]
pub struct DataArgs {
    /// x values (comma-separated).
    #[arg(long, default_value = "1, 2, 3, 4, 5", allow_hyphen_values = true)]
    pub x: String,

    /// y values (comma-separated).
    #[arg(long, default_value = "2, 4, 5, 4, 5", allow_hyphen_values = true)]
    pub y: String,

    /// Read samples from a CSV file with `x` and `y` columns instead.
    #[arg(short = 'f', long, value_name = "CSV", conflicts_with_all = ["x", "y"])]
    pub file: Option<PathBuf>,
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Fitting method.
    #[arg(short = 'm', long, value_enum, ignore_case = true, default_value_t = Degree::Linear)]
    pub method: Degree,

    /// Number of points sampled along the fitted curve (plot/exports).
    #[arg(long, default_value_t = DEFAULT_CURVE_POINTS)]
    pub points: usize,

    /// Also print the equation in LaTeX.
    #[arg(long)]
    pub latex: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export curve (degree + coefficients + fitted grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Export a scatter + curve chart to SVG.
    #[arg(long = "export-svg")]
    pub export_svg: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `lsq fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

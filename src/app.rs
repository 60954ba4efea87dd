//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - runs the fit (or degree comparison)
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, DataArgs, FitArgs, PlotArgs};
use crate::domain::{DataSource, FitConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lsq` binary.
pub fn run() -> Result<(), AppError> {
    // Optional; a missing .env is fine.
    dotenvy::dotenv().ok();
    crate::logging::init();

    // We want `lsq` and `lsq --method cubic` to behave like `lsq fit ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Compare(args) => handle_compare(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let fit = pipeline::run_fit(&config)?;

    println!("{}", crate::report::format_run_summary(&fit, config.latex));
    println!("{}", crate::report::format_residual_table(&fit));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(&fit, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    Ok(())
}

fn handle_compare(args: DataArgs) -> Result<(), AppError> {
    let comparison = pipeline::run_compare(&data_source(&args))?;

    println!("{}", crate::report::format_comparison(&comparison));
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;

    println!("{} fit: y = {}", curve.degree.display_name(), curve.equation);
    let plot = crate::plot::render_ascii_plot_from_curve(&curve, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        source: data_source(&args.data),
        degree: args.method,
        curve_points: args.points,
        latex: args.latex,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_curve: args.export_curve.clone(),
        export_svg: args.export_svg.clone(),
    }
}

fn data_source(args: &DataArgs) -> DataSource {
    match &args.file {
        Some(path) => DataSource::Csv(path.clone()),
        None => DataSource::Inline {
            x: args.x.clone(),
            y: args.y.clone(),
        },
    }
}

/// Rewrite argv so `lsq` defaults to `lsq fit`.
///
/// Rules:
/// - `lsq`                      -> `lsq fit`
/// - `lsq --method cubic ...`   -> `lsq fit --method cubic ...`
/// - `lsq --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "compare" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_CURVE_POINTS;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_fit() {
        assert_eq!(rewrite_args(argv(&["lsq"])), argv(&["lsq", "fit"]));
        assert_eq!(
            rewrite_args(argv(&["lsq", "--method", "cubic"])),
            argv(&["lsq", "fit", "--method", "cubic"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(rewrite_args(argv(&["lsq", "--help"])), argv(&["lsq", "--help"]));
        assert_eq!(rewrite_args(argv(&["lsq", "compare"])), argv(&["lsq", "compare"]));
        assert_eq!(
            rewrite_args(argv(&["lsq", "plot", "--curve", "c.json"])),
            argv(&["lsq", "plot", "--curve", "c.json"])
        );
    }

    #[test]
    fn config_reflects_flags() {
        let args = FitArgs::parse_from([
            "fit",
            "--x",
            "1,2,3",
            "--y",
            "4,5,6",
            "--method",
            "quadratic",
            "--no-plot",
            "--latex",
        ]);
        let config = fit_config_from_args(&args);
        assert_eq!(
            config.source,
            DataSource::Inline {
                x: "1,2,3".to_string(),
                y: "4,5,6".to_string()
            }
        );
        assert_eq!(config.degree, crate::domain::Degree::Quadratic);
        assert!(!config.plot);
        assert!(config.latex);
        assert_eq!(config.curve_points, DEFAULT_CURVE_POINTS);
    }
}

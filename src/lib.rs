//! `lsq-fit` library crate.
//!
//! Least squares polynomial fitting (linear, quadratic, cubic) for x/y samples.
//!
//! The binary (`lsq`) is a thin wrapper around this library so that:
//!
//! - the fitting core is testable without spawning processes
//! - parsing, fitting, reporting and plotting stay independent of the CLI
//!
//! ```
//! use lsq_fit::{Degree, fit, format_equation, parse_dataset};
//!
//! let samples = parse_dataset("1, 2, 3, 4, 5", "2, 4, 5, 4, 5").unwrap();
//! let result = fit(&samples, Degree::Linear).unwrap();
//! assert_eq!(format_equation(&result.coefficients), "0.6*x + 2.2");
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

pub use domain::{Degree, FitQuality, FitResult, Sample};
pub use error::{AppError, FitError};
pub use fit::{Comparison, compare_degrees, fit};
pub use io::parse_dataset;
pub use models::{DEFAULT_CURVE_POINTS, evaluate_range, predict};
pub use report::{format_equation, format_equation_latex};

//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input samples and the degree selector (`Sample`, `Degree`)
//! - fit outputs (`FitResult`, `FitQuality`)
//! - run configuration (`FitConfig`, `DataSource`)
//! - the saved curve schema (`CurveFile`)

pub mod types;

pub use types::*;

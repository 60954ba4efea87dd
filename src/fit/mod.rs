//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit a single polynomial degree by least squares (`fitter`)
//! - fit every degree and collect diagnostics side by side (`compare`)

pub mod compare;
pub mod fitter;

pub use compare::*;
pub use fitter::*;

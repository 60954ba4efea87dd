//! Mathematical utilities: least squares solver.

pub mod ols;

pub use ols::*;

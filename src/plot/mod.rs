//! Plot rendering.
//!
//! - fixed-grid terminal plot (`ascii`)
//! - SVG chart export via Plotters (`svg`)

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;

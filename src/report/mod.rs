//! Reporting utilities: equations, residual tables, and fit diagnostics.

pub mod format;

pub use format::*;

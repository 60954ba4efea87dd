//! Polynomial model evaluation.
//!
//! Models are implemented as small, pure functions so that fitting, reporting
//! and plotting code can share them.

pub mod model;

pub use model::*;

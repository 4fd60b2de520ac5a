//! Model fitting and selection.
//!
//! Responsibilities:
//!
//! - fit each of the six candidate growth models by least squares in the
//!   growth-transformed coordinate (parallel)
//! - score each fit by its sum of absolute residuals
//! - select the minimum-residual model deterministically

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;

//! Output helpers.
//!
//! - per-sample CSV export (`export`)
//! - run JSON read/write (`export`)

pub mod export;

pub use export::*;

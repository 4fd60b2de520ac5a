//! Shared domain types.
//!
//! This module defines:
//!
//! - the fixed candidate set of growth models (`Complexity`)
//! - the collected measurement data (`SampleSet`, `StopReason`)
//! - fit outputs (`FitResult`, `ComplexityModel`, `FitQuality`, `Estimate`)
//! - run configuration (`ProbeConfig`) and the JSON export schema (`RunFile`)

pub mod types;

pub use types::*;

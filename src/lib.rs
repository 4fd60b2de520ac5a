//! `bigo` library crate.
//!
//! The binary (`bigo`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., embedding the estimator in another tool)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod bench;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod measure;
pub mod models;
pub mod plot;
pub mod report;

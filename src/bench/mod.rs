//! The workload capability interface and the built-in workload registry.
//!
//! A workload is the thing being measured. The sampler drives it through three
//! hooks per input size:
//!
//! - `generate(size)`: build input data for the given size (untimed)
//! - `run()`: execute the operation once against the prepared input (timed)
//! - `reset()`: undo any persistent mutation `run` performed, so the next
//!   size starts clean
//!
//! Workloads are resolved by name from a registered factory at startup, so an
//! unknown workload is a configuration error rather than a runtime lookup
//! failure.

pub mod registry;

pub use registry::*;

/// The capability interface a benchmark target supplies.
///
/// `run` must not depend on call count to remain meaningful across the
/// repeated executions inside one timed batch.
pub trait Workload {
    /// Prepare input data for the given size. Called once per sampled size,
    /// outside the timed region.
    fn generate(&mut self, size: u64);

    /// Execute the operation once against the prepared input. This is the
    /// timed region; it runs `repetitions` times per sample.
    fn run(&mut self);

    /// Reset any shared state mutated by `run`. Called once per sampled size,
    /// after the timed batch.
    fn reset(&mut self);
}

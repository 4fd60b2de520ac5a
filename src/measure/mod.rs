//! Measurement sampling.
//!
//! Responsibilities:
//!
//! - drive the workload through generate/run/reset for growing sizes
//! - time each repetition batch with a monotonic wall clock
//! - stop at the size bound or the cumulative-time ceiling

pub mod sampler;

pub use sampler::*;

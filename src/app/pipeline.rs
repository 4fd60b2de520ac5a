//! Shared probe pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! workload lookup -> measurement scan -> fit/selection -> residuals
//!
//! The CLI can then focus on presentation (printing vs exports).

use std::time::Duration;

use crate::bench;
use crate::domain::{ProbeConfig, SampleResidual, SampleSet};
use crate::error::AppError;
use crate::fit::Estimate;
use crate::measure::{Sampler, SamplerConfig};

/// All computed outputs of a single `bigo run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub estimate: Estimate,
    pub residuals: Vec<SampleResidual>,
}

/// Execute the full probe pipeline and return the computed outputs.
pub fn run_probe(config: &ProbeConfig) -> Result<RunOutput, AppError> {
    // 1) Resolve the workload at startup; unknown names fail here, before any
    //    measurement happens.
    let mut workload = bench::create(&config.workload, config.seed)?;

    // 2) Measurement scan. A timeout truncates the scan and is carried on the
    //    sample set, not raised as an error.
    let sampler_config = SamplerConfig {
        repetitions: config.repetitions,
        max_size: config.max_size,
        max_time: Duration::from_secs_f64(config.max_time_secs),
    };
    let samples = Sampler::new(workload.as_mut(), sampler_config).collect();

    run_estimation(samples)
}

/// Fit and package a pre-collected sample set.
///
/// Split from `run_probe` so tests can drive estimation with synthetic
/// samples without timing anything.
pub fn run_estimation(samples: SampleSet) -> Result<RunOutput, AppError> {
    let estimate = crate::fit::estimate(&samples)?;
    let residuals = crate::report::compute_residuals(&samples, &estimate.best)?;

    Ok(RunOutput {
        samples,
        estimate,
        residuals,
    })
}

//! Export measured samples and run results.
//!
//! Two formats:
//! - CSV of per-sample rows, easy to consume in spreadsheets or downstream
//!   scripts
//! - run JSON, the "portable" representation of a completed probe: chosen
//!   model + coefficients, quality, and the full sample grid

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::domain::{ProbeConfig, RunFile, SampleGrid, SampleResidual, SampleSet};
use crate::error::AppError;
use crate::fit::Estimate;

/// Write per-sample results to a CSV file.
pub fn write_samples_csv(path: &Path, residuals: &[SampleResidual]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "size,time_secs,fitted_secs,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in residuals {
        writeln!(file, "{},{:.9e},{:.9e},{:.9e}", r.size, r.time, r.fitted, r.residual)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a run JSON file.
pub fn write_run_json(
    path: &Path,
    samples: &SampleSet,
    estimate: &Estimate,
    config: &ProbeConfig,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create run JSON '{}': {e}", path.display()))
    })?;

    let run = RunFile {
        tool: "bigo".to_string(),
        generated: Local::now().to_rfc3339(),
        workload: config.workload.clone(),
        seed: config.seed,
        repetitions: config.repetitions,
        stop: samples.stop,
        model: estimate.best.model.clone(),
        quality: estimate.best.quality.clone(),
        samples: SampleGrid {
            size: samples.sizes.clone(),
            time_secs: samples.times.clone(),
        },
    };

    serde_json::to_writer_pretty(file, &run)
        .map_err(|e| AppError::new(2, format!("Failed to write run JSON: {e}")))?;

    Ok(())
}

/// Read a run JSON file.
///
/// The file is validated beyond plain deserialization: a model carrying fewer
/// coefficients than its kind requires would make every downstream
/// prediction panic, so it is rejected here.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open run JSON '{}': {e}", path.display()))
    })?;
    let run: RunFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid run JSON: {e}")))?;

    let expected = run.model.kind.coeff_len();
    if run.model.coeffs.len() < expected {
        return Err(AppError::new(
            2,
            format!(
                "Invalid run JSON: {} expects {expected} coefficients, found {}.",
                run.model.kind.display_name(),
                run.model.coeffs.len()
            ),
        ));
    }

    Ok(run)
}

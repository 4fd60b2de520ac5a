//! Debug bundle writer for inspecting a probe run.
//!
//! Writes a markdown file with the run parameters, the full sample table, and
//! the per-model fit table. This is the explicit diagnostics surface of the
//! tool; there is no process-global logger.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::domain::{ProbeConfig, SampleSet, StopReason};
use crate::error::AppError;
use crate::fit::Estimate;

pub fn write_debug_bundle(
    samples: &SampleSet,
    estimate: &Estimate,
    config: &ProbeConfig,
) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| AppError::new(2, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("bigo_debug_{}_seed{}_{ts}.md", config.workload, config.seed));

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(2, format!("Failed to create debug file: {e}")))?;

    write_bundle(&mut file, samples, estimate, config)
        .map_err(|e| AppError::new(2, format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn write_bundle(
    file: &mut File,
    samples: &SampleSet,
    estimate: &Estimate,
    config: &ProbeConfig,
) -> std::io::Result<()> {
    writeln!(file, "# bigo debug bundle")?;
    writeln!(file, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(file, "- workload: {}", config.workload)?;
    writeln!(file, "- seed: {}", config.seed)?;
    writeln!(file, "- repetitions: {}", config.repetitions)?;
    writeln!(file, "- max_size: {}", config.max_size)?;
    writeln!(file, "- max_time: {:.1}s", config.max_time_secs)?;
    let stop = match samples.stop {
        StopReason::SizeBound => "size bound",
        StopReason::Timeout => "timeout",
    };
    writeln!(file, "- stop: {stop} after {} samples", samples.len())?;

    writeln!(file, "\n## Fits")?;
    writeln!(file, "| model | residual_sum | coeffs |")?;
    writeln!(file, "| - | - | - |")?;
    for fit in &estimate.fits {
        let chosen = if fit.model.kind == estimate.best.model.kind {
            " (chosen)"
        } else {
            ""
        };
        writeln!(
            file,
            "| {}{chosen} | {:.6e} | {} |",
            fit.model.display_name,
            fit.quality.residual_sum,
            fmt_vec(&fit.model.coeffs),
        )?;
    }

    writeln!(file, "\n## Samples")?;
    writeln!(file, "| size | time_secs |")?;
    writeln!(file, "| - | - |")?;
    for (&size, &time) in samples.sizes.iter().zip(samples.times.iter()) {
        writeln!(file, "| {size} | {time:.9e} |")?;
    }

    Ok(())
}

fn fmt_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.6e}")).collect();
    format!("[{}]", parts.join(", "))
}

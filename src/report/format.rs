//! Residual computation and formatted terminal output.

use crate::domain::{FitResult, ProbeConfig, SampleResidual, SampleSet};
use crate::error::AppError;
use crate::fit::Estimate;
use crate::models::{invert, predict};

/// Compute fitted values and residuals for each sample against a chosen fit.
pub fn compute_residuals(
    samples: &SampleSet,
    fit: &FitResult,
) -> Result<Vec<SampleResidual>, AppError> {
    let mut out = Vec::with_capacity(samples.len());
    for (&size, &time) in samples.sizes.iter().zip(samples.times.iter()) {
        let fitted = predict(fit.model.kind, size as f64, &fit.model.coeffs);
        if !fitted.is_finite() {
            return Err(AppError::new(
                1,
                "Non-finite model prediction during residual computation.",
            ));
        }
        out.push(SampleResidual {
            size,
            time,
            fitted,
            residual: time - fitted,
        });
    }
    Ok(out)
}

/// Format the full run summary (scan stats + fit diagnostics + chosen model).
pub fn format_run_summary(
    samples: &SampleSet,
    estimate: &Estimate,
    config: &ProbeConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== bigo - empirical complexity probe ===\n");
    out.push_str(&format!("Workload: {} (seed {})\n", config.workload, config.seed));
    out.push_str(&format!(
        "Scan: n={} | sizes=[1, {}] | reps/batch={}\n",
        samples.len(),
        samples.sizes.last().copied().unwrap_or(0),
        config.repetitions,
    ));
    if samples.timed_out() {
        out.push_str(&format!(
            "Stop: time ceiling {:.1}s reached; estimating on the partial scan\n",
            config.max_time_secs
        ));
    } else {
        out.push_str(&format!("Stop: size bound {} reached\n", config.max_size));
    }

    out.push_str("\nModel diagnostics:\n");
    for fit in &estimate.fits {
        let chosen = if fit.model.kind == estimate.best.model.kind { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<12} residual={:.6e}  coeffs={}\n",
            fit.model.display_name,
            fit.quality.residual_sum,
            fmt_vec(&fit.model.coeffs),
        ));
    }

    let best = &estimate.best;
    out.push_str(&format!(
        "\nEstimated complexity: {}\n",
        best.model.display_name
    ));
    out.push_str(&format!(
        "Function time(n): {}, coefficients: {}\n",
        best.model.kind.formula(),
        fmt_vec(&best.model.coeffs),
    ));
    match best.model.kind.inverse_formula() {
        Some(inverse) => {
            out.push_str(&format!(
                "Function n(time): {}, coefficients: {}\n",
                inverse,
                fmt_vec(&best.model.coeffs),
            ));
        }
        None => {
            out.push_str("Function n(time): no closed-form inverse exists\n");
        }
    }
    if best.model.kind.coeff_len() == 2 {
        if let Some(n) = invert(best.model.kind, config.max_time_secs, &best.model.coeffs) {
            if n >= 1.0 {
                out.push_str(&format!(
                    "Projected size at the {:.1}s ceiling: ~{n:.0}\n",
                    config.max_time_secs
                ));
            }
        }
    }

    out
}

fn fmt_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.6e}")).collect();
    format!("[{}]", parts.join(", "))
}

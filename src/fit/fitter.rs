//! Low-level fitting for a single candidate model.
//!
//! Given the collected `(size, time)` samples we solve, for each candidate:
//!
//! - an OLS problem in the growth-transformed coordinate to find `(a, b)`
//!   such that `time ≈ a·g(size) + b` (degree-1), or the single coefficient
//!   `a` for the constant model (degree-0)
//! - the resulting residual score: `Σ |a·g(x_j) + b − y_j|`
//!
//! The residual score is a sum of absolute deviations even though the fit
//! itself minimizes squared error; the score only needs to rank the six
//! candidates against each other.

use nalgebra::{DMatrix, DVector};

use crate::domain::{Complexity, ComplexityModel, FitQuality, FitResult, SampleSet};
use crate::error::AppError;
use crate::math::solve_least_squares;
use crate::models::{growth, predict};

/// Fit one candidate model to the sample set.
pub fn fit_model(kind: Complexity, samples: &SampleSet) -> Result<FitResult, AppError> {
    let n = samples.len();
    if n == 0 {
        return Err(AppError::new(1, "No samples to fit."));
    }

    let coeffs = match kind {
        // The degree-0 least-squares solution is the sample mean. Computed
        // directly so an exactly constant dataset gets an exact coefficient
        // (and a zero residual) instead of SVD round-off.
        Complexity::Constant => {
            let mean = samples.times.iter().sum::<f64>() / n as f64;
            vec![mean]
        }
        _ => {
            let mut x = DMatrix::<f64>::zeros(n, 2);
            let mut y = DVector::<f64>::zeros(n);
            for (j, (&size, &time)) in samples.sizes.iter().zip(samples.times.iter()).enumerate() {
                x[(j, 0)] = growth(kind, size as f64);
                x[(j, 1)] = 1.0;
                y[j] = time;
            }
            let beta = solve_least_squares(&x, &y).ok_or_else(|| {
                AppError::new(
                    1,
                    format!("Least-squares solve failed for {}.", kind.display_name()),
                )
            })?;
            vec![beta[0], beta[1]]
        }
    };

    let residual_sum = residual_score(kind, &coeffs, samples)?;

    Ok(FitResult {
        model: ComplexityModel {
            kind,
            display_name: kind.display_name().to_string(),
            coeffs,
        },
        quality: FitQuality { residual_sum, n },
    })
}

/// Sum of absolute deviations of the fitted curve from the observed times.
fn residual_score(kind: Complexity, coeffs: &[f64], samples: &SampleSet) -> Result<f64, AppError> {
    let mut sum = 0.0;
    for (&size, &time) in samples.sizes.iter().zip(samples.times.iter()) {
        sum += (predict(kind, size as f64, coeffs) - time).abs();
    }
    if sum.is_finite() {
        Ok(sum)
    } else {
        Err(AppError::new(
            1,
            format!("Non-finite residual for {}.", kind.display_name()),
        ))
    }
}

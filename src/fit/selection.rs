//! Candidate fitting + minimum-residual selection.
//!
//! All six candidates are always fit (the set is process-wide constant data,
//! not user-configurable) and the one with the smallest sum of absolute
//! residuals wins. Candidates are evaluated in parallel, but selection is a
//! sequential scan with a strict comparison, so on an exact residual tie the
//! lowest-indexed candidate wins deterministically.

use rayon::prelude::*;

use crate::domain::{Complexity, FitResult, SampleSet};
use crate::error::AppError;
use crate::fit::fitter::fit_model;

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub best: FitResult,
    /// Fits for all six candidates, in candidate order (for diagnostics).
    pub fits: Vec<FitResult>,
}

/// Fit every candidate model and select the best.
///
/// Fewer than three samples is a client error: a degree-1 fit is
/// under-determined below two points and residual comparison is unreliable
/// below three.
pub fn estimate(samples: &SampleSet) -> Result<Estimate, AppError> {
    if samples.len() < 3 {
        return Err(AppError::insufficient_measurements(samples.len()));
    }

    // Order is preserved by the indexed parallel collect, so `fits[i]`
    // corresponds to `Complexity::ALL[i]`.
    let fits: Vec<FitResult> = Complexity::ALL
        .into_par_iter()
        .map(|kind| fit_model(kind, samples))
        .collect::<Result<_, _>>()?;

    let mut best = 0;
    for (idx, fit) in fits.iter().enumerate().skip(1) {
        if fit.quality.residual_sum < fits[best].quality.residual_sum {
            best = idx;
        }
    }

    Ok(Estimate {
        best: fits[best].clone(),
        fits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopReason;
    use crate::models::predict;

    /// Deterministic small perturbation, tiny relative to the signals below.
    fn noise(j: usize) -> f64 {
        1e-7 * ((j * 37 % 11) as f64 - 5.0)
    }

    fn synthetic(kind: Complexity, coeffs: &[f64], n: u64, noisy: bool) -> SampleSet {
        let sizes: Vec<u64> = (1..=n).collect();
        let times: Vec<f64> = sizes
            .iter()
            .enumerate()
            .map(|(j, &x)| {
                let base = predict(kind, x as f64, coeffs);
                if noisy { base + noise(j) } else { base }
            })
            .collect();
        SampleSet {
            sizes,
            times,
            stop: StopReason::SizeBound,
        }
    }

    #[test]
    fn recovers_the_generating_model_for_each_candidate() {
        let cases: [(Complexity, &[f64]); 5] = [
            (Complexity::Linear, &[3e-3, 2e-3]),
            (Complexity::Quadratic, &[5e-4, 1e-3]),
            (Complexity::Cubic, &[1e-5, 1e-3]),
            (Complexity::Logarithmic, &[4e-2, 1e-2]),
            (Complexity::Linearithmic, &[2e-4, 1e-3]),
        ];

        for (kind, coeffs) in cases {
            let set = synthetic(kind, coeffs, 80, true);
            let est = estimate(&set).unwrap();
            assert_eq!(
                est.best.model.kind, kind,
                "expected {kind:?}, residuals: {:?}",
                est.fits
                    .iter()
                    .map(|f| (f.model.kind, f.quality.residual_sum))
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn exactly_constant_data_selects_the_constant_model() {
        // The degree-0 fit is the exact mean with a zero residual; every
        // degree-1 fit carries SVD round-off.
        let set = synthetic(Complexity::Constant, &[2.0], 40, false);
        let est = estimate(&set).unwrap();
        assert_eq!(est.best.model.kind, Complexity::Constant);
        assert_eq!(est.best.quality.residual_sum, 0.0);
    }

    #[test]
    fn all_zero_data_ties_and_the_lowest_index_wins() {
        // y = 0 everywhere fits every candidate exactly (a = b = 0), so all
        // six residual sums are 0.0 and the first candidate must win.
        let set = SampleSet {
            sizes: (1..=10).collect(),
            times: vec![0.0; 10],
            stop: StopReason::SizeBound,
        };
        for _ in 0..5 {
            let est = estimate(&set).unwrap();
            assert_eq!(est.best.model.kind, Complexity::Linear);
        }
    }

    #[test]
    fn too_few_samples_is_a_named_error() {
        for n in 0..3u64 {
            let set = SampleSet {
                sizes: (1..=n).collect(),
                times: vec![1.0; n as usize],
                stop: StopReason::SizeBound,
            };
            let err = estimate(&set).unwrap_err();
            assert_eq!(err.exit_code(), 3, "n={n} should be insufficient");
        }
    }

    #[test]
    fn exactly_three_samples_succeeds() {
        let set = SampleSet {
            sizes: vec![1, 2, 3],
            times: vec![1.0, 2.0, 3.0],
            stop: StopReason::SizeBound,
        };
        let est = estimate(&set).unwrap();
        assert_eq!(est.fits.len(), 6);
    }

    #[test]
    fn all_six_fits_are_reported_in_candidate_order() {
        let set = synthetic(Complexity::Linear, &[1e-3, 0.0], 20, true);
        let est = estimate(&set).unwrap();
        let kinds: Vec<Complexity> = est.fits.iter().map(|f| f.model.kind).collect();
        assert_eq!(kinds, Complexity::ALL.to_vec());
    }

    #[test]
    fn estimation_succeeds_on_a_timed_out_partial_scan() {
        let mut set = synthetic(Complexity::Linear, &[1e-3, 0.0], 12, true);
        set.stop = StopReason::Timeout;
        let est = estimate(&set).unwrap();
        assert_eq!(est.best.model.kind, Complexity::Linear);
    }
}

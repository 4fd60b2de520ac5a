//! Model evaluation for the six candidate growth shapes.
//!
//! The fitter relies on two primitive operations:
//! - transform an input size by the growth function `g` (for OLS)
//! - predict `time(n)` given fitted coefficients (for residuals/plots)
//!
//! A numeric inverse (`n(time)`) is also provided for the five invertible
//! models.

use crate::domain::Complexity;

/// Evaluate the growth function `g(n)` for the given model kind.
///
/// `n` is expected to be `>= 1`; `log2` is exact at the scan's first size
/// (`log2(1) = 0`).
pub fn growth(kind: Complexity, n: f64) -> f64 {
    match kind {
        Complexity::Linear => n,
        Complexity::Quadratic => n * n,
        Complexity::Cubic => n * n * n,
        Complexity::Logarithmic => n.log2(),
        Complexity::Linearithmic => n * n.log2(),
        Complexity::Constant => 1.0,
    }
}

/// Predict `time(n)` for the given model kind.
///
/// Coefficients are `[a, b]` for degree-1 models (`time = a*g(n) + b`) and
/// `[a]` for the constant model.
///
/// # Panics
/// Panics if `coeffs` is shorter than `kind.coeff_len()`. Callers obtain
/// coefficient vectors from the fitter, which sizes them correctly.
pub fn predict(kind: Complexity, n: f64, coeffs: &[f64]) -> f64 {
    match kind {
        Complexity::Constant => coeffs[0],
        _ => coeffs[0] * growth(kind, n) + coeffs[1],
    }
}

/// Numerically invert the fitted model: the input size at which the model
/// reaches `time`.
///
/// Returns `None` for the linearithmic model (no closed-form inverse) and
/// whenever the inverse is not a finite value (e.g. zero slope, or a negative
/// radicand for the even root).
pub fn invert(kind: Complexity, time: f64, coeffs: &[f64]) -> Option<f64> {
    let n = match kind {
        Complexity::Linear => (time - coeffs[1]) / coeffs[0],
        Complexity::Quadratic => ((time - coeffs[1]) / coeffs[0]).sqrt(),
        Complexity::Cubic => ((time - coeffs[1]) / coeffs[0]).cbrt(),
        Complexity::Logarithmic => ((time - coeffs[1]) / coeffs[0]).exp2(),
        Complexity::Linearithmic => return None,
        Complexity::Constant => 1.0 / coeffs[0],
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_matches_expected_shapes() {
        assert_eq!(growth(Complexity::Linear, 8.0), 8.0);
        assert_eq!(growth(Complexity::Quadratic, 8.0), 64.0);
        assert_eq!(growth(Complexity::Cubic, 8.0), 512.0);
        assert_eq!(growth(Complexity::Logarithmic, 8.0), 3.0);
        assert_eq!(growth(Complexity::Linearithmic, 8.0), 24.0);
        assert_eq!(growth(Complexity::Constant, 8.0), 1.0);
    }

    #[test]
    fn growth_is_zero_log_at_size_one() {
        assert_eq!(growth(Complexity::Logarithmic, 1.0), 0.0);
        assert_eq!(growth(Complexity::Linearithmic, 1.0), 0.0);
    }

    #[test]
    fn predict_degree_one_and_degree_zero() {
        let coeffs = [2.0, 1.0];
        assert_eq!(predict(Complexity::Linear, 5.0, &coeffs), 11.0);
        assert_eq!(predict(Complexity::Quadratic, 3.0, &coeffs), 19.0);
        assert_eq!(predict(Complexity::Constant, 999.0, &[4.5]), 4.5);
    }

    #[test]
    fn invert_round_trips_for_invertible_models() {
        let coeffs = [0.5, 0.25];
        for kind in [
            Complexity::Linear,
            Complexity::Quadratic,
            Complexity::Cubic,
            Complexity::Logarithmic,
        ] {
            let n = 16.0;
            let t = predict(kind, n, &coeffs);
            let back = invert(kind, t, &coeffs).unwrap();
            assert!((back - n).abs() < 1e-9, "{kind:?}: {back} != {n}");
        }
    }

    #[test]
    fn invert_linearithmic_is_none() {
        assert_eq!(invert(Complexity::Linearithmic, 1.0, &[1.0, 0.0]), None);
    }

    #[test]
    fn invert_rejects_non_finite_results() {
        // Zero slope gives an infinite inverse.
        assert_eq!(invert(Complexity::Linear, 1.0, &[0.0, 0.0]), None);
        // Negative radicand under the square root gives NaN.
        assert_eq!(invert(Complexity::Quadratic, -1.0, &[1.0, 0.0]), None);
    }
}

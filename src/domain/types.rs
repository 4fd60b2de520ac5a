//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be:
//!
//! - used in-memory during sampling and fitting
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One of the six fixed candidate growth models, in tie-break order.
///
/// The ordering is load-bearing: selection scans candidates in this order and
/// only a strictly smaller residual replaces the incumbent, so on an exact
/// residual tie the lower-indexed model wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Linear,
    Quadratic,
    Cubic,
    Logarithmic,
    Linearithmic,
    Constant,
}

impl Complexity {
    /// All candidates in selection order.
    pub const ALL: [Complexity; 6] = [
        Complexity::Linear,
        Complexity::Quadratic,
        Complexity::Cubic,
        Complexity::Logarithmic,
        Complexity::Linearithmic,
        Complexity::Constant,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Complexity::Linear => "O(n)",
            Complexity::Quadratic => "O(n^2)",
            Complexity::Cubic => "O(n^3)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Constant => "O(1)",
        }
    }

    /// Forward formula template, `time` as a function of `n`.
    ///
    /// Coefficients are reported alongside the template rather than
    /// substituted into it.
    pub fn formula(self) -> &'static str {
        match self {
            Complexity::Linear => "a*n + b",
            Complexity::Quadratic => "a*n^2 + b",
            Complexity::Cubic => "a*n^3 + b",
            Complexity::Logarithmic => "a*log2(n) + b",
            Complexity::Linearithmic => "a*n*log2(n) + b",
            Complexity::Constant => "a",
        }
    }

    /// Inverse formula template, `n` as a function of `time`.
    ///
    /// `None` for the linearithmic model, which has no closed-form inverse.
    pub fn inverse_formula(self) -> Option<&'static str> {
        match self {
            Complexity::Linear => Some("(time - b)/a"),
            Complexity::Quadratic => Some("((time - b)/a)^(1/2)"),
            Complexity::Cubic => Some("((time - b)/a)^(1/3)"),
            Complexity::Logarithmic => Some("2^((time - b)/a)"),
            Complexity::Linearithmic => None,
            Complexity::Constant => Some("1/a"),
        }
    }

    /// Number of fitted coefficients: `[a, b]`, or `[a]` for the constant
    /// model (degree-0 fit).
    pub fn coeff_len(self) -> usize {
        match self {
            Complexity::Constant => 1,
            _ => 2,
        }
    }
}

/// Why the sampler stopped collecting.
///
/// A timeout is an expected truncation of the scan, not an error: estimation
/// proceeds on whatever was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopReason {
    /// The size upper bound was reached.
    SizeBound,
    /// Cumulative measured time reached the ceiling before the size bound.
    Timeout,
}

/// The collected measurement data.
///
/// `sizes` is strictly increasing starting at 1; `times` holds the raw batch
/// duration in seconds for each size (not divided by the repetition count).
/// `sizes.len() == times.len()` by construction, and the set is never mutated
/// after collection ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSet {
    pub sizes: Vec<u64>,
    pub times: Vec<f64>,
    pub stop: StopReason,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn timed_out(&self) -> bool {
        self.stop == StopReason::Timeout
    }
}

/// Fitted model parameters and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityModel {
    pub kind: Complexity,
    pub display_name: String,
    /// `[a, b]` for degree-1 models, `[a]` for the constant model.
    pub coeffs: Vec<f64>,
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    /// Sum of absolute deviations between the fitted curve and the samples.
    pub residual_sum: f64,
    pub n: usize,
}

/// Fit output for a single candidate model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub model: ComplexityModel,
    pub quality: FitQuality,
}

/// A per-sample fitted value (used for plotting and exports).
#[derive(Debug, Clone)]
pub struct SampleResidual {
    pub size: u64,
    pub time: f64,
    pub fitted: f64,
    pub residual: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Registry name of the workload to measure.
    pub workload: String,
    /// Seed for workload input data generation.
    pub seed: u64,

    /// Operation executions per timed batch.
    pub repetitions: usize,
    /// Largest input size to scan.
    pub max_size: u64,
    /// Cumulative measured-time ceiling in seconds.
    pub max_time_secs: f64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Export per-sample results to CSV.
    pub export_samples: Option<PathBuf>,
    /// Export the full run (model + samples) to JSON.
    pub export_run: Option<PathBuf>,
    /// Write a markdown diagnostics bundle.
    pub debug_bundle: bool,
}

/// Portable JSON representation of a completed run.
///
/// The schema is written by `io::export::write_run_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub generated: String,
    pub workload: String,
    pub seed: u64,
    pub repetitions: usize,
    pub stop: StopReason,
    pub model: ComplexityModel,
    pub quality: FitQuality,
    pub samples: SampleGrid,
}

/// Paired sample columns for the JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleGrid {
    pub size: Vec<u64>,
    pub time_secs: Vec<f64>,
}

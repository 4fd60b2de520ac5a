//! The measurement sampler.
//!
//! For each input size `i = 1, 2, …` the sampler:
//!
//! 1. asks the workload to generate input data for `i` (untimed)
//! 2. times a batch of `repetitions` consecutive `run()` calls
//! 3. records the raw batch duration as the sample for `i`
//! 4. invokes `reset()` so the next size starts clean
//!
//! The batch duration is deliberately not divided by the repetition count:
//! amplifying every sample by the same constant factor does not change which
//! growth model fits best, and the estimator is consistent with this scale.
//!
//! The scan ends when the size bound is reached or when cumulative measured
//! time hits the ceiling. A timeout truncates the scan and is reported as a
//! `StopReason` on the returned set, never as an error. Workload panics
//! propagate; a faulty benchmark target invalidates the whole run.

use std::time::{Duration, Instant};

use crate::bench::Workload;
use crate::domain::{SampleSet, StopReason};

/// Knobs for one measurement scan.
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    /// Operation executions per timed batch.
    pub repetitions: usize,
    /// Largest input size to scan (inclusive).
    pub max_size: u64,
    /// Cumulative measured-time ceiling.
    pub max_time: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            repetitions: 10,
            max_size: 999,
            max_time: Duration::from_secs_f64(30.0),
        }
    }
}

/// Drives a workload and accumulates `(size, batch_time)` samples.
///
/// The sampler owns the sample vectors during collection; the finished
/// `SampleSet` is handed to the estimator and never mutated afterwards.
pub struct Sampler<'a> {
    workload: &'a mut dyn Workload,
    config: SamplerConfig,
}

impl<'a> Sampler<'a> {
    pub fn new(workload: &'a mut dyn Workload, config: SamplerConfig) -> Self {
        Self { workload, config }
    }

    /// Run the full scan and return the collected samples.
    pub fn collect(mut self) -> SampleSet {
        let reps = self.config.repetitions.max(1);
        let mut sizes = Vec::new();
        let mut times = Vec::new();
        let mut total = Duration::ZERO;

        for i in 1..=self.config.max_size {
            sizes.push(i);
            self.workload.generate(i);

            let batch = self.measure_batch(reps);
            times.push(batch.as_secs_f64());
            total += batch;

            self.workload.reset();

            if total >= self.config.max_time {
                return SampleSet {
                    sizes,
                    times,
                    stop: StopReason::Timeout,
                };
            }
        }

        SampleSet {
            sizes,
            times,
            stop: StopReason::SizeBound,
        }
    }

    /// Time one batch of repetitions against the currently prepared input.
    #[inline]
    fn measure_batch(&mut self, reps: usize) -> Duration {
        let start = Instant::now();
        for _ in 0..reps {
            self.workload.run();
        }
        start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts hook invocations; `run` optionally sleeps a fixed duration so
    /// tests can exercise the time ceiling.
    struct CountingWorkload {
        generates: Vec<u64>,
        runs: usize,
        resets: usize,
        run_cost: Duration,
    }

    impl CountingWorkload {
        fn instant() -> Self {
            Self::with_cost(Duration::ZERO)
        }

        fn with_cost(run_cost: Duration) -> Self {
            Self {
                generates: Vec::new(),
                runs: 0,
                resets: 0,
                run_cost,
            }
        }
    }

    impl Workload for CountingWorkload {
        fn generate(&mut self, size: u64) {
            self.generates.push(size);
        }

        fn run(&mut self) {
            self.runs += 1;
            if !self.run_cost.is_zero() {
                std::thread::sleep(self.run_cost);
            }
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    #[test]
    fn scan_runs_to_the_size_bound() {
        let mut w = CountingWorkload::instant();
        let config = SamplerConfig {
            repetitions: 3,
            max_size: 7,
            max_time: Duration::from_secs(60),
        };
        let set = Sampler::new(&mut w, config).collect();

        assert_eq!(set.stop, StopReason::SizeBound);
        assert_eq!(set.sizes, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(set.times.len(), 7);
        assert_eq!(w.generates, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(w.runs, 7 * 3);
        assert_eq!(w.resets, 7);
    }

    #[test]
    fn ceiling_truncates_the_scan_keeping_collected_samples() {
        let mut w = CountingWorkload::with_cost(Duration::from_millis(2));
        let config = SamplerConfig {
            repetitions: 1,
            max_size: 999,
            max_time: Duration::from_millis(10),
        };
        let set = Sampler::new(&mut w, config).collect();

        assert_eq!(set.stop, StopReason::Timeout);
        // Each sample costs at least 2ms, so a 10ms ceiling admits at most 5
        // samples (the boundary sample that trips the ceiling is kept); sleep
        // overshoot can only reduce the count.
        assert!(!set.is_empty());
        assert!(set.len() <= 5, "collected {} samples", set.len());
        assert_eq!(set.sizes.len(), set.times.len());
        // The sample that tripped the ceiling was still reset.
        assert_eq!(w.resets, set.len());
    }

    #[test]
    fn sizes_are_strictly_increasing_from_one() {
        let mut w = CountingWorkload::instant();
        let config = SamplerConfig {
            repetitions: 1,
            max_size: 25,
            max_time: Duration::from_secs(60),
        };
        let set = Sampler::new(&mut w, config).collect();
        for (idx, &size) in set.sizes.iter().enumerate() {
            assert_eq!(size, idx as u64 + 1);
        }
    }

    #[test]
    fn repetitions_floor_at_one() {
        let mut w = CountingWorkload::instant();
        let config = SamplerConfig {
            repetitions: 0,
            max_size: 3,
            max_time: Duration::from_secs(60),
        };
        let set = Sampler::new(&mut w, config).collect();
        assert_eq!(set.len(), 3);
        assert_eq!(w.runs, 3);
    }
}

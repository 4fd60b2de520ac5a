//! Built-in workloads, resolved by name.
//!
//! Each entry generates its input data from a seeded RNG so runs are
//! reproducible for a given `--seed`. The expected complexity listed next to
//! each name is what the estimator should report once sizes are large enough
//! for the dominant term to show.

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::bench::Workload;
use crate::error::AppError;

/// Registered workload names with a short description for `bigo list`.
pub fn names() -> &'static [(&'static str, &'static str)] {
    &[
        ("sort", "sort a random vector (expected O(n log n))"),
        ("sum", "sum a vector (expected O(n))"),
        ("pairs", "count ordered pairs with a nested loop (expected O(n^2))"),
        ("bsearch", "binary search in a sorted vector (expected O(log n))"),
        ("noop", "black-boxed scalar identity (expected O(1))"),
    ]
}

/// Instantiate a workload by registry name.
///
/// Unknown names are a startup-configuration error (exit code 2).
pub fn create(name: &str, seed: u64) -> Result<Box<dyn Workload>, AppError> {
    match name {
        "sort" => Ok(Box::new(SortWorkload::new(seed))),
        "sum" => Ok(Box::new(SumWorkload::new(seed))),
        "pairs" => Ok(Box::new(PairCountWorkload::new(seed))),
        "bsearch" => Ok(Box::new(BinarySearchWorkload::new(seed))),
        "noop" => Ok(Box::new(NoopWorkload::default())),
        other => Err(AppError::new(
            2,
            format!(
                "Unknown workload '{other}'. Run `bigo list` to see registered workloads."
            ),
        )),
    }
}

/// Sort a freshly cloned random vector each run.
///
/// The clone costs O(n) per run, which the O(n log n) sort dominates.
struct SortWorkload {
    rng: StdRng,
    data: Vec<u64>,
}

impl SortWorkload {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: Vec::new(),
        }
    }
}

impl Workload for SortWorkload {
    fn generate(&mut self, size: u64) {
        self.data = (0..size).map(|_| self.rng.next_u64()).collect();
    }

    fn run(&mut self) {
        let mut v = self.data.clone();
        v.sort_unstable();
        black_box(v);
    }

    fn reset(&mut self) {}
}

/// Sum a random vector.
struct SumWorkload {
    rng: StdRng,
    data: Vec<u64>,
}

impl SumWorkload {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: Vec::new(),
        }
    }
}

impl Workload for SumWorkload {
    fn generate(&mut self, size: u64) {
        self.data = (0..size).map(|_| self.rng.gen_range(0..1024)).collect();
    }

    fn run(&mut self) {
        let total: u64 = self.data.iter().copied().sum();
        black_box(total);
    }

    fn reset(&mut self) {}
}

/// Count pairs `(i, j)` with `data[i] < data[j]` using a nested loop.
struct PairCountWorkload {
    rng: StdRng,
    data: Vec<u64>,
}

impl PairCountWorkload {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: Vec::new(),
        }
    }
}

impl Workload for PairCountWorkload {
    fn generate(&mut self, size: u64) {
        self.data = (0..size).map(|_| self.rng.next_u64()).collect();
    }

    fn run(&mut self) {
        let mut count = 0u64;
        for (i, &a) in self.data.iter().enumerate() {
            for &b in &self.data[i + 1..] {
                if a < b {
                    count += 1;
                }
            }
        }
        black_box(count);
    }

    fn reset(&mut self) {}
}

/// Binary search for a random needle in a sorted vector of even numbers.
struct BinarySearchWorkload {
    rng: StdRng,
    data: Vec<u64>,
    needle: u64,
}

impl BinarySearchWorkload {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: Vec::new(),
            needle: 0,
        }
    }
}

impl Workload for BinarySearchWorkload {
    fn generate(&mut self, size: u64) {
        self.data = (0..size).map(|i| i * 2).collect();
        // Odd needle: always misses, so every run walks the full log2(n) path.
        self.needle = self.rng.gen_range(0..size.max(1) * 2) | 1;
    }

    fn run(&mut self) {
        black_box(self.data.binary_search(&self.needle).is_ok());
    }

    fn reset(&mut self) {}
}

/// Scalar identity through `black_box`; constant-time baseline.
#[derive(Default)]
struct NoopWorkload {
    value: u64,
}

impl Workload for NoopWorkload {
    fn generate(&mut self, size: u64) {
        self.value = size;
    }

    fn run(&mut self) {
        black_box(self.value);
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_resolves_registered_names() {
        for &(name, _) in names() {
            assert!(create(name, 42).is_ok(), "workload '{name}' should resolve");
        }
    }

    #[test]
    fn create_rejects_unknown_names() {
        // `err()` first: the Ok side holds a boxed trait object without Debug.
        let err = create("definitely-not-registered", 42).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn sort_workload_regenerates_per_size() {
        let mut w = SortWorkload::new(7);
        w.generate(10);
        assert_eq!(w.data.len(), 10);
        w.run();
        w.reset();
        w.generate(20);
        assert_eq!(w.data.len(), 20);
    }

    #[test]
    fn bsearch_needle_always_misses() {
        let mut w = BinarySearchWorkload::new(7);
        w.generate(100);
        assert!(w.data.binary_search(&w.needle).is_err());
    }
}

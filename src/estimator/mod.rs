//! Top-level estimation runs
//!
//! The [`Estimator`] ties the pieces together: build a batch plan, dispatch
//! the batches to workers (a rayon fork-join pool, or the calling thread for
//! sequential runs), merge the per-batch hit counts, and derive the pi
//! estimate with wall-clock timing around the whole run.
//!
//! # Example
//!
//! ```
//! use pibench::estimator::Estimator;
//! use pibench::partition::PartitionPolicy;
//!
//! let estimator = Estimator::new(2, Some(42));
//! let run = estimator
//!     .run_parallel::<std::io::Stdout>(10_000, PartitionPolicy::PerWorker { workers: 2 }, None)?;
//!
//! assert_eq!(run.stats.samples(), 10_000);
//! assert!(run.estimate > 2.0 && run.estimate < 4.0);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::Config;
use crate::output::reporter::BatchReporter;
use crate::partition::PartitionPolicy;
use crate::sampler::{self, SeedMode};
use crate::stats::BatchStats;
use crate::util::time::Timestamp;
use crate::Result;
use anyhow::Context;
use rayon::prelude::*;
use std::io::Write;
use std::time::Duration;

/// Outcome of one complete estimation run
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Merged sample and hit counts across all batches
    pub stats: BatchStats,
    /// The pi estimate `(hits / samples) * 4`
    pub estimate: f64,
    /// Wall-clock time for the whole dispatch, partitioning included
    pub elapsed: Duration,
}

/// Monte Carlo pi estimator
///
/// Holds no sampling state of its own; every run builds fresh per-batch
/// point sources, so an `Estimator` may be reused across runs.
pub struct Estimator {
    threads: usize,
    seed: SeedMode,
}

impl Estimator {
    /// Create an estimator with an explicit worker count and optional base
    /// seed (`None` means OS entropy per batch)
    pub fn new(threads: usize, seed: Option<u64>) -> Self {
        Self {
            threads,
            seed: match seed {
                Some(base) => SeedMode::Fixed(base),
                None => SeedMode::Entropy,
            },
        }
    }

    /// Create an estimator from validated configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.workers.threads, config.sampling.seed)
    }

    /// Run the workload partitioned across the worker pool.
    ///
    /// Batches execute fork-join on a pool of `threads` workers; per-batch
    /// hit counts merge through the commutative [`BatchStats`] reduction, so
    /// scheduling order never affects the result. When a `reporter` is
    /// attached, every finished batch writes one diagnostic line.
    pub fn run_parallel<W: Write + Send>(
        &self,
        total: u64,
        policy: PartitionPolicy,
        reporter: Option<&BatchReporter<W>>,
    ) -> Result<RunStats> {
        let start = Timestamp::now();

        let batches = policy.plan(total);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .context("Failed to build worker thread pool")?;

        let seed = self.seed;
        let stats = pool.install(|| {
            batches
                .par_iter()
                .enumerate()
                .map(|(index, &size)| {
                    let hits = sampler::sample_batch(size, seed, index as u64);
                    if let Some(reporter) = reporter {
                        reporter.report(rayon::current_thread_index().unwrap_or(0), hits, size);
                    }
                    BatchStats::from_batch(size, hits)
                })
                .reduce(BatchStats::new, BatchStats::merged)
        });

        Ok(RunStats {
            stats,
            estimate: stats.estimate(),
            elapsed: start.elapsed(),
        })
    }

    /// Run the whole workload as a single batch on the calling thread.
    pub fn run_sequential(&self, total: u64) -> RunStats {
        let start = Timestamp::now();

        let hits = sampler::sample_batch(total, self.seed, 0);
        let stats = BatchStats::from_batch(total, hits);

        RunStats {
            stats,
            estimate: stats.estimate(),
            elapsed: start.elapsed(),
        }
    }
}

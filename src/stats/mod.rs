//! Sampling statistics
//!
//! Per-batch sample and hit counts, plus the commutative merge that reduces
//! them into a run total. The merge is plain field-wise addition, so batches
//! may be combined in any order and any grouping without changing the
//! result.
//!
//! # Example
//!
//! ```
//! use pibench::stats::BatchStats;
//!
//! let mut total = BatchStats::new();
//! total.merge(&BatchStats::from_batch(500, 392));
//! total.merge(&BatchStats::from_batch(500, 397));
//!
//! assert_eq!(total.samples(), 1000);
//! assert_eq!(total.hits(), 789);
//! ```

use serde::{Deserialize, Serialize};

/// Sample and hit counts for one batch, or the merged totals of many
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Points drawn
    samples: u64,
    /// Points that landed inside the unit circle
    hits: u64,
}

impl BatchStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for one completed batch
    ///
    /// # Panics
    ///
    /// Panics if `hits` exceeds `samples` - a sampler can never report more
    /// hits than points drawn.
    pub fn from_batch(samples: u64, hits: u64) -> Self {
        assert!(hits <= samples, "hits ({}) exceed samples ({})", hits, samples);
        Self { samples, hits }
    }

    /// Points drawn
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Points inside the unit circle
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Merge statistics from another batch into this one
    ///
    /// Commutative and associative, so partial results may be combined in
    /// any order.
    pub fn merge(&mut self, other: &BatchStats) {
        self.samples += other.samples;
        self.hits += other.hits;
    }

    /// Merge by value, for use as a reduction operator
    pub fn merged(mut self, other: BatchStats) -> Self {
        self.merge(&other);
        self
    }

    /// The pi estimate `(hits / samples) * 4`
    ///
    /// Returns NaN when no samples were drawn; the ratio is undefined and
    /// callers are expected to have rejected an empty workload up front.
    pub fn estimate(&self) -> f64 {
        if self.samples == 0 {
            return f64::NAN;
        }
        (self.hits as f64 / self.samples as f64) * 4.0
    }
}

//! pibench - Monte Carlo pi estimation benchmark
//!
//! pibench estimates the value of pi by sampling uniformly random points in
//! the unit square and counting the fraction that land inside the inscribed
//! unit circle. The same workload runs partitioned across parallel workers
//! and as a single sequential batch, and the two are compared by wall-clock
//! time.
//!
//! # Architecture
//!
//! - **Partitioning**: split a total sample count into per-worker batches
//!   or fixed-granularity chunks, never losing or duplicating a sample
//! - **Sampling**: one independently seeded PRNG per batch, no shared
//!   mutable state between concurrent batches
//! - **Reduction**: commutative merge of per-batch hit counts, parallel
//!   fork-join or trivial sequential
//! - **Reporting**: timed text/JSON comparison, plus an optional per-batch
//!   diagnostic line serialized through a shared output lock

pub mod config;
pub mod estimator;
pub mod output;
pub mod partition;
pub mod sampler;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use estimator::Estimator;

/// Result type used throughout pibench
pub type Result<T> = anyhow::Result<T>;

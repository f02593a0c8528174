//! JSON output formatting
//!
//! Serializes the timed comparison as a single JSON document for downstream
//! tooling. Per-batch diagnostic lines stay plain text - they are worker
//! output, not a report format.

use crate::estimator::RunStats;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One mode's result within the comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRun {
    pub estimate: f64,
    pub samples: u64,
    pub hits: u64,
    pub elapsed_ms: u64,
}

impl JsonRun {
    pub fn from_run(run: &RunStats) -> Self {
        Self {
            estimate: run.estimate,
            samples: run.stats.samples(),
            hits: run.stats.hits(),
            elapsed_ms: run.elapsed.as_millis() as u64,
        }
    }
}

/// Complete comparison report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub parallel: JsonRun,
    pub sequential: JsonRun,
    pub threads: usize,
}

impl ComparisonReport {
    pub fn new(parallel: &RunStats, sequential: &RunStats, threads: usize) -> Self {
        Self {
            parallel: JsonRun::from_run(parallel),
            sequential: JsonRun::from_run(sequential),
            threads,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize comparison report")
    }
}

/// Print the comparison report as JSON on stdout
pub fn print_comparison(parallel: &RunStats, sequential: &RunStats, threads: usize) -> Result<()> {
    let report = ComparisonReport::new(parallel, sequential, threads);
    println!("{}", report.to_json_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BatchStats;
    use std::time::Duration;

    fn run_stats(samples: u64, hits: u64, millis: u64) -> RunStats {
        let stats = BatchStats::from_batch(samples, hits);
        RunStats {
            stats,
            estimate: stats.estimate(),
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ComparisonReport::new(
            &run_stats(1000, 785, 3),
            &run_stats(1000, 781, 9),
            4,
        );

        let json = report.to_json_string().unwrap();
        let parsed: ComparisonReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.parallel.samples, 1000);
        assert_eq!(parsed.parallel.hits, 785);
        assert_eq!(parsed.parallel.elapsed_ms, 3);
        assert_eq!(parsed.sequential.hits, 781);
        assert_eq!(parsed.threads, 4);
        assert!((parsed.parallel.estimate - 3.14).abs() < 1e-12);
    }
}

//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod file;
pub mod validator;

use serde::{Deserialize, Serialize};

/// Complete benchmark configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub workers: WorkerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub run: RunSelection,
}

/// Sampling workload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Total samples for the timed parallel vs sequential comparison
    #[serde(default = "default_compare_samples")]
    pub compare_samples: u64,
    /// Total samples for the per-batch diagnostic run
    #[serde(default = "default_diagnostic_samples")]
    pub diagnostic_samples: u64,
    /// Batch size for the diagnostic run
    #[serde(default = "default_granularity")]
    pub granularity: u64,
    /// Base seed for reproducible runs; None means OS entropy per batch
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            compare_samples: default_compare_samples(),
            diagnostic_samples: default_diagnostic_samples(),
            granularity: default_granularity(),
            seed: None,
        }
    }
}

fn default_compare_samples() -> u64 {
    1000
}

fn default_diagnostic_samples() -> u64 {
    100_000_000
}

fn default_granularity() -> u64 {
    100_000
}

/// Worker thread configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Number of worker threads; 0 means "all hardware threads" until
    /// resolved by [`WorkerConfig::resolve_threads`]
    #[serde(default)]
    pub threads: usize,
}

impl WorkerConfig {
    /// Replace the hardware-parallelism sentinel (0) with the actual CPU
    /// count, so everything downstream sees a positive worker count
    pub fn resolve_threads(&mut self) {
        if self.threads == 0 {
            self.threads = num_cpus::get();
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format for the timed comparison
    #[serde(default)]
    pub format: OutputFormat,
    /// Verbose timing diagnostics on stderr
    #[serde(default)]
    pub debug: bool,
}

/// Report format for the timed comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text report
    #[default]
    Text,
    /// Single JSON document on stdout
    Json,
}

/// Which of the two configured runs to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunSelection {
    /// Timed parallel vs sequential comparison only
    Compare,
    /// Per-batch diagnostic run only
    Diagnostic,
    /// Both, comparison first
    #[default]
    All,
}

impl RunSelection {
    /// Whether the timed comparison executes under this selection
    pub fn includes_compare(&self) -> bool {
        matches!(self, RunSelection::Compare | RunSelection::All)
    }

    /// Whether the diagnostic run executes under this selection
    pub fn includes_diagnostic(&self) -> bool {
        matches!(self, RunSelection::Diagnostic | RunSelection::All)
    }
}

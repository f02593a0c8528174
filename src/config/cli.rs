//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// pibench - Monte Carlo pi estimation benchmark
#[derive(Parser, Debug)]
#[command(name = "pibench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Sampling Options ===
    /// Total samples for the timed parallel vs sequential comparison
    #[arg(short = 's', long, default_value = "1000")]
    pub samples: u64,

    /// Number of worker threads (0 = all hardware threads)
    #[arg(short = 't', long, default_value = "0")]
    pub threads: usize,

    /// Total samples for the per-batch diagnostic run
    #[arg(long, default_value = "100000000")]
    pub diag_samples: u64,

    /// Batch size for the diagnostic run
    #[arg(short = 'g', long, default_value = "100000")]
    pub granularity: u64,

    /// Base seed for reproducible runs (omit for OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    // === Run Options ===
    /// Which runs to execute
    #[arg(long, value_enum, default_value = "all")]
    pub run: RunArg,

    // === Output Options ===
    /// Result format for the timed comparison
    #[arg(long, value_enum, default_value = "text")]
    pub output: FormatArg,

    // === Configuration File ===
    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output (partition plans, per-run timing)
    #[arg(long)]
    pub debug: bool,
}

/// Run selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunArg {
    /// Timed parallel vs sequential comparison
    Compare,
    /// Per-batch diagnostic run
    Diagnostic,
    /// Both runs, comparison first
    All,
}

/// Result format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain text report
    Text,
    /// Single JSON document on stdout
    Json,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.samples == 0 {
            anyhow::bail!("samples must be at least 1");
        }

        if self.diag_samples == 0 {
            anyhow::bail!("diag-samples must be at least 1");
        }

        if self.granularity == 0 {
            anyhow::bail!("granularity must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_historical_constants() {
        let cli = Cli::parse_from(["pibench"]);
        assert_eq!(cli.samples, 1000);
        assert_eq!(cli.diag_samples, 100_000_000);
        assert_eq!(cli.granularity, 100_000);
        assert_eq!(cli.threads, 0);
        assert_eq!(cli.run, RunArg::All);
        assert!(cli.seed.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let cli = Cli::parse_from(["pibench", "--samples", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_granularity_rejected() {
        let cli = Cli::parse_from(["pibench", "-g", "0"]);
        assert!(cli.validate().is_err());
    }
}

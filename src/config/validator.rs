//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
///
/// Runs after CLI and config-file merge, so every rejected value here is
/// one the user actually asked for.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sampling(&config.sampling)?;
    validate_workers(&config.workers)?;

    Ok(())
}

/// Validate sampling configuration
pub fn validate_sampling(sampling: &SamplingConfig) -> Result<()> {
    // A zero-sample run has an undefined estimate (0/0), reject up front
    if sampling.compare_samples == 0 {
        anyhow::bail!("compare_samples must be at least 1");
    }

    if sampling.diagnostic_samples == 0 {
        anyhow::bail!("diagnostic_samples must be at least 1");
    }

    if sampling.granularity == 0 {
        anyhow::bail!("granularity must be at least 1");
    }

    Ok(())
}

/// Validate worker configuration
///
/// Expects the hardware-parallelism sentinel to already be resolved.
pub fn validate_workers(workers: &WorkerConfig) -> Result<()> {
    if workers.threads == 0 {
        anyhow::bail!("threads must be at least 1 after hardware resolution");
    }

    Ok(())
}

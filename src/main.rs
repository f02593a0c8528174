//! pibench CLI entry point

use anyhow::{Context, Result};
use pibench::config::{cli::Cli, file, validator, Config, OutputFormat, RunSelection};
use pibench::estimator::Estimator;
use pibench::output::reporter::StdoutReporter;
use pibench::output::{json, text};
use pibench::partition::PartitionPolicy;
use pibench::util::time::{calculate_sample_rate, format_duration};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    // Build configuration (config file, then CLI overrides)
    let config = build_config(&cli)?;

    // Validate the merged configuration before touching any worker pool
    validator::validate_config(&config).context("Configuration validation failed")?;

    if config.output.debug {
        print_configuration(&config);
    }

    if cli.dry_run {
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let estimator = Estimator::from_config(&config);

    if config.run.includes_compare() {
        run_comparison(&estimator, &config)?;
    }

    if config.run.includes_diagnostic() {
        // Keep the two reports visually separate when both execute
        if config.run == RunSelection::All {
            println!();
        }
        run_diagnostic(&estimator, &config)?;
    }

    Ok(())
}

/// Build configuration from CLI arguments and the optional config file
fn build_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => file::parse_toml_file(path)?,
        None => Config::default(),
    };

    let mut config = file::merge_cli_with_config(cli, base);
    config.workers.resolve_threads();

    Ok(config)
}

/// Timed comparison: the same workload partitioned across the pool, then as
/// one sequential batch, each measured wall-clock
fn run_comparison(estimator: &Estimator, config: &Config) -> Result<()> {
    let total = config.sampling.compare_samples;
    let policy = PartitionPolicy::PerWorker {
        workers: config.workers.threads,
    };

    let parallel = estimator.run_parallel::<std::io::Stdout>(total, policy, None)?;
    if config.output.debug {
        eprintln!(
            "DEBUG TIMING: parallel run: {} ({} workers)",
            format_duration(parallel.elapsed),
            config.workers.threads
        );
    }

    let sequential = estimator.run_sequential(total);
    if config.output.debug {
        eprintln!(
            "DEBUG TIMING: sequential run: {}",
            format_duration(sequential.elapsed)
        );
    }

    match config.output.format {
        OutputFormat::Text => text::print_comparison(&parallel, &sequential),
        OutputFormat::Json => {
            json::print_comparison(&parallel, &sequential, config.workers.threads)?
        }
    }

    Ok(())
}

/// Diagnostic run: fixed-granularity batches, each reporting its own hit
/// count through the shared stdout lock, then the final estimate
fn run_diagnostic(estimator: &Estimator, config: &Config) -> Result<()> {
    let total = config.sampling.diagnostic_samples;
    let policy = PartitionPolicy::ByGranularity {
        granularity: config.sampling.granularity,
    };

    let reporter = StdoutReporter::stdout();
    let run = estimator.run_parallel(total, policy, Some(&reporter))?;
    if config.output.debug {
        eprintln!(
            "DEBUG TIMING: diagnostic run: {} ({:.0} samples/s)",
            format_duration(run.elapsed),
            calculate_sample_rate(run.stats.samples(), run.elapsed)
        );
    }

    text::print_estimate(&run);

    Ok(())
}

/// Dump the effective configuration to stderr (debug mode only)
fn print_configuration(config: &Config) {
    eprintln!("Configuration:");
    eprintln!("  Sampling:");
    eprintln!("    Comparison samples: {}", config.sampling.compare_samples);
    eprintln!("    Diagnostic samples: {}", config.sampling.diagnostic_samples);
    eprintln!("    Granularity: {}", config.sampling.granularity);
    if let Some(seed) = config.sampling.seed {
        eprintln!("    Seed: {}", seed);
    }
    eprintln!("  Workers:");
    eprintln!("    Threads: {}", config.workers.threads);
    eprintln!("  Output:");
    eprintln!("    Format: {:?}", config.output.format);
}

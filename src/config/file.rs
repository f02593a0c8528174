//! TOML configuration file parsing

use super::cli::{Cli, FormatArg, RunArg};
use super::{Config, OutputFormat, RunSelection};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
///
/// Flags left at their clap defaults do not override file values, so a
/// config file can change any setting while explicit flags still win.
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if cli.samples != 1000 {
        config.sampling.compare_samples = cli.samples;
    }
    if cli.diag_samples != 100_000_000 {
        config.sampling.diagnostic_samples = cli.diag_samples;
    }
    if cli.granularity != 100_000 {
        config.sampling.granularity = cli.granularity;
    }
    if let Some(seed) = cli.seed {
        config.sampling.seed = Some(seed);
    }
    if cli.threads != 0 {
        config.workers.threads = cli.threads;
    }

    if cli.run != RunArg::All {
        config.run = match cli.run {
            RunArg::Compare => RunSelection::Compare,
            RunArg::Diagnostic => RunSelection::Diagnostic,
            RunArg::All => RunSelection::All,
        };
    }

    if cli.output != FormatArg::Text {
        config.output.format = match cli.output {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        };
    }

    if cli.debug {
        config.output.debug = true;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_toml_string() {
        let config = parse_toml_string(
            r#"
            [sampling]
            compare_samples = 5000
            granularity = 250

            [workers]
            threads = 2

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.sampling.compare_samples, 5000);
        assert_eq!(config.sampling.granularity, 250);
        // Unset fields keep their defaults
        assert_eq!(config.sampling.diagnostic_samples, 100_000_000);
        assert_eq!(config.workers.threads, 2);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_toml_file_via_tempfile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sampling]\ncompare_samples = 777\nseed = 9").unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.sampling.compare_samples, 777);
        assert_eq!(config.sampling.seed, Some(9));
    }

    #[test]
    fn test_parse_missing_file_fails_with_path() {
        let err = parse_toml_file(Path::new("/nonexistent/pibench.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pibench.toml"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let file_config = parse_toml_string(
            r#"
            [sampling]
            compare_samples = 5000

            [workers]
            threads = 2
            "#,
        )
        .unwrap();

        let cli = Cli::parse_from(["pibench", "--samples", "42", "--seed", "7"]);
        let merged = merge_cli_with_config(&cli, file_config);

        assert_eq!(merged.sampling.compare_samples, 42);
        assert_eq!(merged.sampling.seed, Some(7));
        // CLI default does not clobber the file's explicit thread count
        assert_eq!(merged.workers.threads, 2);
    }

    #[test]
    fn test_default_cli_keeps_file_config_intact() {
        let file_config = parse_toml_string(
            r#"
            [sampling]
            compare_samples = 5000
            diagnostic_samples = 200000
            granularity = 50
            "#,
        )
        .unwrap();

        let cli = Cli::parse_from(["pibench"]);
        let merged = merge_cli_with_config(&cli, file_config);

        assert_eq!(merged.sampling.compare_samples, 5000);
        assert_eq!(merged.sampling.diagnostic_samples, 200_000);
        assert_eq!(merged.sampling.granularity, 50);
    }
}

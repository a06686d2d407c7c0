//! genlint CLI - explicit generics checker for TypeScript
//!
//! Flags call sites that omit required explicit generic annotations.
//! Which callables require generics, and how many, comes from
//! `.genlint.toml` or repeated `--require` flags:
//!
//! - `useState(0)` with `require = ["useState"]` is reported with the
//!   suggestion `useState<SomeType>(...)`
//! - `new Map()` with `Map = 2` is reported with `Map<TypeA, TypeB>(...)`
//! - `"collection.get"`, `"*.get"`, and `"get"` match method calls with
//!   decreasing specificity

mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use genlint_analyze::{collect_files, Analyzer};
use genlint_core::RuleOptions;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use config::Config;
use output::{OutputFormat, Reporter};

#[derive(Parser)]
#[command(name = "genlint")]
#[command(version = "0.1.0")]
#[command(about = "Checks TypeScript call sites for required explicit generics")]
struct Cli {
    /// Files or directories to analyze
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Require explicit generics for NAME (repeatable). NAME=COUNT sets a
    /// minimum count; a bare NAME means one. Overrides the config file.
    #[arg(long, short = 'r', value_name = "NAME[=COUNT]")]
    require: Vec<String>,

    /// Output format: text, json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: String,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Path to config file (default: auto-detect .genlint.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Determine output format
    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::from_str(&cli.format).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid output format '{}'. Valid options: text, json",
                cli.format
            )
        })?
    };

    // Load config file
    let config = if cli.no_config {
        Config::default()
    } else if let Some(config_path) = &cli.config {
        let cfg = Config::load_path(config_path)?;
        if cli.verbose && output_format == OutputFormat::Text {
            println!("{}: {}", "Using config".bold(), config_path.display());
        }
        cfg
    } else {
        match Config::load()? {
            Some((cfg, path)) => {
                if cli.verbose && output_format == OutputFormat::Text {
                    println!("{}: {}", "Using config".bold(), path.display());
                }
                cfg
            }
            None => Config::default(),
        }
    };

    // --require flags override the config file completely
    let options = if cli.require.is_empty() {
        config.generics.require.clone()
    } else {
        Some(parse_require_args(&cli.require)?)
    };

    let analyzer = match &options {
        Some(options) => Analyzer::new(options),
        None => Analyzer::unconfigured(),
    };

    // Report paths that do not exist before walking the rest
    for path in &cli.paths {
        if !path.exists() && output_format == OutputFormat::Text {
            eprintln!(
                "{}: Path does not exist: {}",
                "Warning".yellow(),
                path.display()
            );
        }
    }

    // Collect files, honoring config excludes, and sort for
    // deterministic output
    let mut files: Vec<PathBuf> = collect_files(&cli.paths)
        .into_iter()
        .filter(|path| !config.should_exclude(path))
        .collect();
    files.sort();

    if cli.verbose && output_format == OutputFormat::Text {
        println!("{}: {} files", "Analyzing".bold(), files.len());
    }

    let issues = analyzer.analyze_files(&files);

    let reporter = Reporter::new(output_format, cli.verbose);
    reporter.report(&issues, files.len());

    Ok(if issues.error_count() > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}

/// Parse `--require NAME[=COUNT]` flags into rule options
fn parse_require_args(args: &[String]) -> Result<RuleOptions> {
    let mut counts = HashMap::new();
    for arg in args {
        match arg.split_once('=') {
            Some((name, count)) => {
                let count: usize = count
                    .parse()
                    .with_context(|| format!("Invalid count in --require {}", arg))?;
                if count == 0 {
                    bail!("expected count for '{}' must be at least 1", name);
                }
                counts.insert(name.to_string(), count);
            }
            None => {
                counts.insert(arg.clone(), 1);
            }
        }
    }
    Ok(RuleOptions::Counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genlint_core::ExpectedCounts;

    #[test]
    fn test_parse_bare_names_default_to_one() {
        let options =
            parse_require_args(&["useState".to_string(), "ref".to_string()]).unwrap();
        let counts = ExpectedCounts::from_options(&options);
        assert_eq!(counts.get("useState"), Some(1));
        assert_eq!(counts.get("ref"), Some(1));
    }

    #[test]
    fn test_parse_name_with_count() {
        let options = parse_require_args(&["Map=2".to_string()]).unwrap();
        let counts = ExpectedCounts::from_options(&options);
        assert_eq!(counts.get("Map"), Some(2));
    }

    #[test]
    fn test_parse_rejects_zero_count() {
        let err = parse_require_args(&["Map=0".to_string()]).unwrap_err();
        assert!(err.to_string().contains("must be at least 1"));
    }

    #[test]
    fn test_parse_rejects_garbage_count() {
        assert!(parse_require_args(&["Map=two".to_string()]).is_err());
    }
}

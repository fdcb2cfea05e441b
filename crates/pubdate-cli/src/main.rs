mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use pubdate_core::config::AppConfig;
use pubdate_core::error::PubdateError;
use pubdate_core::renamer;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const DRY_RUN_NOTICE: &str = "Dry run. Use --live to move files.";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config, cli.verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();
    tracing::debug!(files = cli.files.len(), live = cli.live, config = ?cli.config, "Starting");

    match run(&cli, &config, &mut io::stdout().lock(), &mut io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins, then `-v` flags, then the configured filter.
fn log_filter(config: &AppConfig, verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|s| EnvFilter::try_new(s).ok()) {
        return filter;
    }
    match verbose {
        0 => EnvFilter::try_new(&config.general.log_filter)
            .unwrap_or_else(|_| EnvFilter::new("pubdate=warn")),
        1 => EnvFilter::new("pubdate=info"),
        _ => EnvFilter::new("pubdate=debug"),
    }
}

/// Plan, print, and (with `--live`) apply each file in argument order.
///
/// Stops at the first failure; files renamed before it stay renamed.
fn run(
    cli: &Cli,
    config: &AppConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), PubdateError> {
    let normalizer = config.normalizer();

    for file in &cli.files {
        let plan = renamer::plan(file, &normalizer)?;
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&plan)?)?;
        } else {
            writeln!(out, "{plan}")?;
        }

        if cli.live {
            renamer::apply(&plan, config.rename.overwrite)?;
        }
    }

    if !cli.live {
        if cli.json {
            writeln!(err, "{DRY_RUN_NOTICE}")?;
        } else {
            writeln!(out, "{DRY_RUN_NOTICE}")?;
        }
    }
    Ok(())
}

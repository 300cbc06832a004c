use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use estrich_config::EstrichConfig;

mod cli;
mod commands;
mod output;
mod ui;

use commands::Outcome;

/// Exit code for a run whose checks found nonconforming results while
/// `evaluation.fail_on_nonconformity` is set.
const EXIT_NONCONFORMING: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("estrich error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = EstrichConfig::load_with_dotenv(cli.config.as_deref().map(Path::new))
        .context("failed to load estrich configuration")?;
    let flags = cli.global_flags(&config.general)?;
    ui::init(&flags);

    let outcome = commands::dispatch::dispatch(&cli.command, &config, &flags)?;
    Ok(exit_code(outcome, config.evaluation.fail_on_nonconformity))
}

fn exit_code(outcome: Outcome, fail_on_nonconformity: bool) -> ExitCode {
    match outcome {
        Outcome::Nonconforming if fail_on_nonconformity => {
            tracing::debug!("nonconforming result, exiting with {EXIT_NONCONFORMING}");
            ExitCode::from(EXIT_NONCONFORMING)
        }
        _ => ExitCode::SUCCESS,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ESTRICH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

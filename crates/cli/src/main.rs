mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use expiry_core::{ProcessClock, Quantizer};

use crate::cli::CliArgs;

fn main() -> Result<()> {
    // Epoch for the default reading; taken first so it sits at process start.
    let clock = ProcessClock::new();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let config = config::load(args.config.as_deref()).context("failed to load configuration")?;
    config.log_summary();
    let quantizer = Quantizer::new(&config)?;

    let elapsed_ms = report::elapsed_ms(&args, Utc::now(), &clock)?;
    let report = report::build(&quantizer, &args, elapsed_ms)?;
    println!("{}", report::render(&report, args.json)?);
    Ok(())
}

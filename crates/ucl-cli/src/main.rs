use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    let config = config::HostConfig::resolve(cli.config.as_deref())?;
    init_tracing(cli.verbose, config.log_level.as_deref());
    let ok = commands::run_command(cli, config)?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level, then `warn`.
fn init_tracing(verbose: bool, configured: Option<&str>) {
    let fallback = fallback_directive(verbose, configured);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter directive used when `RUST_LOG` is unset.
fn fallback_directive(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ucl",
    about = "User Credential Ledger — run the user record contract against local ledger state",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Host configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ledger state file, overriding the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the contract's instantiate hook
    Init,
    /// Invoke a contract function by name
    Invoke(InvokeArgs),
    /// Write the seed users (initLedger)
    Seed,
    /// Create or replace a user (createUser)
    Create(PassthroughArgs),
    /// Print the raw bytes stored under a key (queryUser)
    Query(PassthroughArgs),
    /// Query a key and decode it as a user record
    Show(ShowArgs),
    /// Print the effective host configuration
    Config,
}

#[derive(Args)]
pub struct InvokeArgs {
    pub function: String,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments handed to the contract unchanged, so it can judge the count.
#[derive(Args)]
pub struct PassthroughArgs {
    #[arg(allow_hyphen_values = true, value_name = "ARG")]
    pub args: Vec<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub key: String,
}

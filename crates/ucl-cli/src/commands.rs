use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use ucl_contract::{Chaincode, Invocation, Operation, Response, UserContract};
use ucl_store::{FileKvStore, InMemoryKvStore, KvStore};
use ucl_types::Record;

use crate::cli::*;
use crate::config::{Backend, HostConfig};

/// Run one command. Returns `false` when the contract answered with a failure.
pub fn run_command(cli: Cli, mut config: HostConfig) -> anyhow::Result<bool> {
    if let Some(path) = cli.store {
        config.backend = Backend::File;
        config.store_path = path;
    }
    let format = cli.format;
    let contract = UserContract::new();

    match cli.command {
        Command::Config => cmd_config(&config, &format),
        Command::Init => {
            let store = open_store(&config)?;
            report(&contract.init(store.as_ref()), &format)
        }
        Command::Invoke(args) => run(
            &contract,
            &config,
            &Invocation::new(args.function, args.args),
            &format,
        ),
        Command::Seed => run(
            &contract,
            &config,
            &Invocation::new(Operation::InitLedger.name(), Vec::<String>::new()),
            &format,
        ),
        Command::Create(args) => run(
            &contract,
            &config,
            &Invocation::new(Operation::CreateUser.name(), args.args),
            &format,
        ),
        Command::Query(args) => run(
            &contract,
            &config,
            &Invocation::new(Operation::QueryUser.name(), args.args),
            &format,
        ),
        Command::Show(args) => cmd_show(&contract, &config, &args.key, &format),
    }
}

fn open_store(config: &HostConfig) -> anyhow::Result<Box<dyn KvStore>> {
    match config.backend {
        Backend::File => {
            let store = FileKvStore::open(&config.store_path).with_context(|| {
                format!("opening ledger state {}", config.store_path.display())
            })?;
            Ok(Box::new(store))
        }
        Backend::Memory => {
            tracing::info!("using in-memory ledger state; nothing will be persisted");
            Ok(Box::new(InMemoryKvStore::new()))
        }
    }
}

fn run(
    contract: &UserContract,
    config: &HostConfig,
    invocation: &Invocation,
    format: &OutputFormat,
) -> anyhow::Result<bool> {
    let store = open_store(config)?;
    let response = contract.invoke(store.as_ref(), invocation);
    report(&response, format)
}

fn report(response: &Response, format: &OutputFormat) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Json => {
            let value = match response {
                Response::Success { payload } => json!({
                    "status": response.status(),
                    "payload": String::from_utf8_lossy(payload),
                }),
                Response::Error { message } => json!({
                    "status": response.status(),
                    "message": message,
                }),
            };
            println!("{value}");
        }
        OutputFormat::Text => match response {
            Response::Success { payload } if payload.is_empty() => {
                println!("{} {}", "✓".green().bold(), "OK".green());
            }
            Response::Success { payload } => {
                let mut out = std::io::stdout().lock();
                out.write_all(payload).context("writing payload")?;
                writeln!(out).context("writing payload")?;
            }
            Response::Error { message } => {
                eprintln!("{} {}", "✗".red().bold(), message);
            }
        },
    }
    Ok(response.is_success())
}

fn cmd_show(
    contract: &UserContract,
    config: &HostConfig,
    key: &str,
    format: &OutputFormat,
) -> anyhow::Result<bool> {
    let store = open_store(config)?;
    let response = contract.invoke(
        store.as_ref(),
        &Invocation::new(Operation::QueryUser.name(), [key]),
    );
    if !response.is_success() {
        return report(&response, format);
    }
    if response.payload().is_empty() {
        eprintln!("No record stored under {}", key.yellow());
        return Ok(false);
    }

    let record = Record::from_bytes(response.payload())
        .with_context(|| format!("decoding value under {key}"))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&record)?),
        OutputFormat::Text => {
            println!("{}  {}", key.yellow().bold(), record.identifier.bold());
            if record.associated_identifiers.is_empty() {
                println!("  Access: {}", "none".dimmed());
            }
            for id in &record.associated_identifiers {
                println!("  Access: {}", id.cyan());
            }
        }
    }
    Ok(true)
}

fn cmd_config(config: &HostConfig, format: &OutputFormat) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(config)?),
        OutputFormat::Text => print!("{}", config.to_toml()?),
    }
    Ok(true)
}

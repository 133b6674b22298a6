//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{logging, menu, report};
use crate::domain::{Validation, Validator};
use crate::storage::{Config, InventoryLoader, LoadReport, RejectLog};

#[derive(Parser)]
#[command(name = "car-inventory")]
#[command(author, version, about = "Validate car inventory records and browse the results")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file (defaults to the global config, if any)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Inventory records file
    #[arg(long, short = 'i', global = true, env = "CAR_INVENTORY_INPUT")]
    pub input: Option<PathBuf>,

    /// Reject log file, recreated on every run
    #[arg(long, global = true, env = "CAR_INVENTORY_REJECT_LOG")]
    pub reject_log: Option<PathBuf>,

    /// Maximum number of accepted records
    #[arg(long, global = true, env = "CAR_INVENTORY_CAPACITY")]
    pub capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the inventory and open the interactive menu (default)
    Menu,

    /// Load the inventory and print the accepted records
    Inventory,

    /// Load the inventory and print the rejected lines
    Rejects,

    /// Validate a single record without touching any file
    Check {
        /// Record fields: ID MODEL QUANTITY PRICE
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        fields: Vec<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = Output::new(cli.format);
    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let loaded = load(&config, &output);
            // The menu is always text, whatever --format says
            println!("Processed {} valid records", loaded.accepted.len());

            let reject_log = RejectLog::new(&config.reject_log);
            menu::run(io::stdin().lock(), &mut io::stdout(), &loaded.accepted, &reject_log)?;
        }

        Commands::Inventory => {
            let loaded = load(&config, &output);

            if output.is_json() {
                output.data(&serde_json::json!({
                    "records": loaded.accepted,
                    "processed": loaded.accepted.len(),
                    "rejected": loaded.rejected,
                    "truncated": loaded.truncated,
                }));
            } else {
                println!("Processed {} valid records", loaded.accepted.len());
                print!("{}", report::inventory_table(&loaded.accepted));
            }
        }

        Commands::Rejects => {
            let loaded = load(&config, &output);
            let reject_log = RejectLog::new(&config.reject_log);

            if output.is_json() {
                let lines = reject_log.read_lines()?.unwrap_or_default();
                output.data(&serde_json::json!({
                    "rejected": loaded.rejected,
                    "lines": lines,
                }));
            } else {
                println!("Processed {} valid records", loaded.accepted.len());
                print!("{}", report::reject_replay(&reject_log)?);
            }
        }

        Commands::Check { fields } => check(&output, &config, &fields.join(" ")),
    }

    Ok(())
}

/// Layers command-line overrides on top of the file configuration
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(reject_log) = &cli.reject_log {
        config.reject_log = reject_log.clone();
    }
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }

    config.validate()?;
    Ok(config)
}

/// Loads the inventory, reporting failures instead of propagating them
///
/// A failed load yields an empty report so the caller can carry on.
fn load(config: &Config, output: &Output) -> LoadReport {
    let loader = InventoryLoader::new(Validator::new(config.rules.clone()), config.capacity);
    let reject_log = RejectLog::new(&config.reject_log);

    match loader.load_file(&config.input, &reject_log) {
        Ok(report) => {
            if report.truncated {
                output.warning(&format!(
                    "Storage full, some records skipped (capacity {})",
                    loader.capacity()
                ));
            }
            report
        }
        Err(e) => {
            tracing::warn!(error = %e, "load aborted");
            output.error(&e.to_string());
            LoadReport::default()
        }
    }
}

/// Validates one line and prints the outcome
fn check(output: &Output, config: &Config, line: &str) {
    let validator = Validator::new(config.rules.clone());

    match validator.process_line(line) {
        Validation::Accepted(record) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "accepted": true,
                    "record": record,
                }));
            } else {
                println!(
                    "Accepted: {} {} {} {:.2}",
                    record.id(),
                    record.model(),
                    record.quantity(),
                    record.price()
                );
            }
        }
        Validation::Rejected(rejection) => {
            if output.is_json() {
                let reasons: Vec<String> = rejection.reasons().iter().map(|r| r.to_string()).collect();
                output.data(&serde_json::json!({
                    "accepted": false,
                    "text": rejection.text(),
                    "reasons": reasons,
                }));
            } else {
                println!("Rejected: {}", rejection.reason_text().trim_end());
            }
        }
    }
}

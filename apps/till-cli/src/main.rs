//! # Till
//!
//! Command-line cash-register change calculator.
//!
//! ## Usage
//! ```bash
//! # Change for a R$ 27,65 purchase paid with R$ 55,00
//! till change --total 27,65 --paid 55
//!
//! # Only one R$ 20,00 bill left in the drawer
//! till change --total 10 --paid 50 --stock stock_20=1
//!
//! # What is in the drawer?
//! till denominations
//! ```
//!
//! ## Exit Status
//! - `0`: change handed out in full (or none due)
//! - `1`: input rejected, short payment, or bad configuration
//! - `2`: change computed but the drawer ran short

mod cli;
mod config;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use till_core::{make_change, CoreError, Locale, Receipt};

use crate::cli::{Cli, Commands};
use crate::config::{ConfigError, TillConfig};

const EXIT_REJECTED: u8 = 1;
const EXIT_SHORTFALL: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            debug!(error = ?err, "till failed");
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_REJECTED)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = TillConfig::load(cli.config.as_deref())?;
    debug!(config_path = ?cli.config, locale = ?config.locale, "Configuration loaded");

    match cli.command {
        Commands::Change { total, paid, stock } => {
            let supply = match config.supply(&stock) {
                Ok(supply) => supply,
                Err(ConfigError::Inventory(err)) => {
                    return reject(&err, &config.locale, cli.json);
                }
                Err(err) => return Err(err.into()),
            };
            debug!(drawer_total_cents = supply.total_value_cents(), "Drawer assembled");
            info!(total = %total, paid = %paid, "Calculating change");

            match make_change(&total, &paid, &supply) {
                Ok(report) => {
                    let receipt = Receipt::for_report(&report, &config.locale);
                    output::print_change(&receipt, Some(&report), None, cli.json)?;

                    if report.is_fully_covered() {
                        info!(
                            change = %report.change,
                            pieces = report.allocation.piece_count(),
                            "Change fully covered"
                        );
                        Ok(ExitCode::SUCCESS)
                    } else {
                        warn!(
                            change = %report.change,
                            remainder = %report.allocation.remainder(),
                            "Drawer cannot cover the change"
                        );
                        Ok(ExitCode::from(EXIT_SHORTFALL))
                    }
                }
                Err(err) => reject(&err, &config.locale, cli.json),
            }
        }
        Commands::Denominations => {
            let supply = config.supply(&[])?;
            output::print_denominations(&supply, &config.locale, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints an alert receipt for input the core refused.
fn reject(err: &CoreError, locale: &Locale, json: bool) -> anyhow::Result<ExitCode> {
    warn!(error = %err, "Calculation rejected");
    let receipt = Receipt::for_error(err, locale);
    output::print_change(&receipt, None, Some(err.to_string()), json)?;
    Ok(ExitCode::from(EXIT_REJECTED))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till_cli=trace` - Show trace for the CLI only
/// - Default: warnings only, so stdout stays clean for `--json`
///
/// Logs always go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! # Configuration
//!
//! Display locale and drawer inventory, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TILL__LOCALE__CURRENCY_SYMBOL`, `TILL__INVENTORY__STOCK_5`, ...)
//! 2. Config file (`till.toml` in the working directory, or `--config <path>`)
//! 3. Defaults (this file): `R$`, comma separator, 10 of every denomination
//!
//! ## Example `till.toml`
//! ```toml
//! [locale]
//! bill_label = "nota"
//! coin_label = "moeda"
//! connector = "de"
//!
//! [inventory]
//! stock_200 = 0
//! stock_0_05 = 25
//! ```
//!
//! Inventory values are read as raw text and sanitized exactly like form
//! input: blanks, negatives and garbage count as zero.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use till_core::{CoreError, Locale, Supply, DEFAULT_STOCK_PER_DENOMINATION, DENOMINATIONS};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "till";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TILL";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TillConfig {
    /// How amounts and line items are printed.
    #[serde(default)]
    pub locale: Locale,

    /// Raw stock count per denomination identifier.
    #[serde(default)]
    pub inventory: BTreeMap<String, String>,
}

impl TillConfig {
    /// Loads configuration from defaults, the config file and the environment.
    ///
    /// An explicit `path` must exist; the default `till.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        for denomination in DENOMINATIONS.iter() {
            builder = builder.set_default(
                format!("inventory.{}", denomination.id),
                DEFAULT_STOCK_PER_DENOMINATION.to_string(),
            )?;
        }

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Assembles the drawer supply: configured inventory first, then the
    /// command-line overrides on top.
    pub fn supply(&self, overrides: &[(String, String)]) -> Result<Supply, ConfigError> {
        let entries = self
            .inventory
            .iter()
            .map(|(id, raw)| (id.as_str(), raw.as_str()))
            .chain(overrides.iter().map(|(id, raw)| (id.as_str(), raw.as_str())));

        Ok(Supply::from_raw(entries)?)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration")]
    Load(#[from] config::ConfigError),

    #[error("Invalid inventory")]
    Inventory(#[from] CoreError),
}

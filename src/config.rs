//! Config

use std::{fs, io, path::PathBuf};

use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::store::CART_TTL_MS;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown ISO currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Deployment configuration.
///
/// Everything that varies per deployment lives here rather than in code:
/// the checkout contact address, the store name used in the order greeting,
/// the display currency, and the persisted slot location. Every field has a
/// default, so a partial (or absent) configuration file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store name used in the order message greeting
    pub store_name: String,

    /// Checkout contact address (messaging account the deep link targets)
    pub contact: String,

    /// Base URL of the external messaging service
    pub messaging_base: String,

    /// ISO currency code for price display
    pub currency: String,

    /// Path of the persisted cart slot
    pub storage_path: PathBuf,

    /// Retention window for persisted snapshots, in milliseconds
    pub ttl_ms: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_name: "Bodega".into(),
            contact: "15550100000".into(),
            messaging_base: "https://wa.me".into(),
            currency: "USD".into(),
            storage_path: PathBuf::from("cart.json"),
            ttl_ms: CART_TTL_MS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, applying defaults for omitted
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.into())?;
        Ok(serde_norway::from_str(&contents)?)
    }

    /// Resolve the configured currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] if the code is not a known
    /// ISO currency.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        iso::find(&self.currency).ok_or_else(|| ConfigError::UnknownCurrency(self.currency.clone()))
    }
}

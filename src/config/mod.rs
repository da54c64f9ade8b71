//! Configuration module for listing_recon.
//!
//! Configuration is loaded from environment variables (optionally seeded
//! from a `.env` file), organized by concern: exchange endpoints and output.

mod exchange_config;
mod output_config;

pub use exchange_config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ExchangeEnvConfig};
pub use output_config::{OutputEnvConfig, OutputFormat};

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub exchanges: ExchangeEnvConfig,
    pub output: OutputEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let exchanges = ExchangeEnvConfig::from_env().context("Failed to load exchange config")?;
        let output = OutputEnvConfig::from_env().context("Failed to load output config")?;

        Ok(Self { exchanges, output })
    }
}

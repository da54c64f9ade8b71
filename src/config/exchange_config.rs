//! Exchange endpoint configuration parsed from environment variables.
//!
//! All three exchanges expose their listings publicly, so only base URLs
//! and HTTP client settings are configurable:
//! - Upbit (KRW, USDT, BTC markets)
//! - Binance (spot exchangeInfo)
//! - Bithumb (public ticker)

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Exchange endpoint configuration
#[derive(Debug, Clone)]
pub struct ExchangeEnvConfig {
    pub upbit_base_url: String,
    pub binance_base_url: String,
    pub bithumb_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ExchangeEnvConfig {
    fn default() -> Self {
        Self {
            upbit_base_url: "https://api.upbit.com".to_string(),
            binance_base_url: "https://api.binance.com".to_string(),
            bithumb_base_url: "https://api.bithumb.com".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ExchangeEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid HTTP_TIMEOUT_SECS: {}", raw))?,
            Err(_) => defaults.timeout_secs,
        };
        if timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            upbit_base_url: base_url("UPBIT_BASE_URL", defaults.upbit_base_url),
            binance_base_url: base_url("BINANCE_BASE_URL", defaults.binance_base_url),
            bithumb_base_url: base_url("BITHUMB_BASE_URL", defaults.bithumb_base_url),
            timeout_secs,
            user_agent: env::var("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}

fn base_url(key: &str, default: String) -> String {
    env::var(key)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_config_defaults() {
        let config = ExchangeEnvConfig::default();
        assert!(config.upbit_base_url.contains("upbit.com"));
        assert!(config.binance_base_url.contains("binance.com"));
        assert!(config.bithumb_base_url.contains("bithumb.com"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_base_url_falls_back_to_default() {
        let url = base_url(
            "LISTING_RECON_TEST_UNSET_URL",
            "https://api.example.com".to_string(),
        );
        assert_eq!(url, "https://api.example.com");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchanges whose listings are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exchange {
    Upbit,
    Binance,
    Bithumb,
}

impl Exchange {
    /// Label used to name asset sets, e.g. `UpbitKRW`.
    pub fn market_label(&self, quote: &str) -> String {
        format!("{}{}", self, quote)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Upbit => write!(f, "Upbit"),
            Exchange::Binance => write!(f, "Binance"),
            Exchange::Bithumb => write!(f, "Bithumb"),
        }
    }
}

/// Quote currencies the reports care about.
pub mod quote {
    pub const KRW: &str = "KRW";
    pub const USDT: &str = "USDT";
    pub const BTC: &str = "BTC";
}

//! Bithumb Listing Source
//!
//! Bithumb has no market-list endpoint; the public `ticker/ALL_{quote}`
//! response is keyed by currency and doubles as one. The same object also
//! holds a `date` entry that is not a currency.

use crate::domain::errors::ListingError;
use crate::domain::ports::ListingSource;
use crate::domain::trading::types::{dedup_pairs, join_pair_code};
use crate::domain::trading::{Exchange, TradingPair};
use crate::infrastructure::core::get_json;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

const BITHUMB: &str = "Bithumb";

/// Keys of the ticker `data` object that are not currencies.
const METADATA_KEYS: &[&str] = &["date"];

/// Bithumb's success status code.
const STATUS_OK: &str = "0000";

pub struct BithumbListingSource {
    client: Client,
    base_url: String,
}

impl BithumbListingSource {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ListingSource for BithumbListingSource {
    fn exchange(&self) -> Exchange {
        Exchange::Bithumb
    }

    async fn fetch_pairs(&self, quote: &str) -> Result<Vec<TradingPair>, ListingError> {
        info!("BithumbListingSource: Fetching {} tickers", quote);

        let url = format!("{}/public/ticker/ALL_{}", self.base_url, quote);
        let payload = get_json(&self.client, BITHUMB, &url).await?;
        let pairs = parse_ticker_all(payload, quote)?;

        info!("BithumbListingSource: Found {} {} pairs", pairs.len(), quote);
        Ok(pairs)
    }
}

/// Normalizes a `ticker/ALL_{quote}` payload.
///
/// Pair codes are synthesized as `{quote}-{currency}` and the base asset is
/// split back out of the code, as for every other exchange.
pub fn parse_ticker_all(payload: Value, quote: &str) -> Result<Vec<TradingPair>, ListingError> {
    let Value::Object(mut root) = payload else {
        return Err(ListingError::format(BITHUMB, "expected a JSON object"));
    };

    if let Some(status) = root.get("status").and_then(Value::as_str)
        && status != STATUS_OK
    {
        warn!("BithumbListingSource: Non-success status {} for {}", status, quote);
    }

    let data = root
        .remove("data")
        .ok_or_else(|| ListingError::format(BITHUMB, "missing field `data`"))?;
    let Value::Object(data) = data else {
        return Err(ListingError::format(BITHUMB, "field `data` is not an object"));
    };

    let pairs = data
        .keys()
        .filter(|currency| !METADATA_KEYS.contains(&currency.as_str()))
        .map(|currency| TradingPair::from_pair_code(&join_pair_code(quote, currency)))
        .collect();

    Ok(dedup_pairs(pairs))
}

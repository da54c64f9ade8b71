//! Binance Listing Source
//!
//! Reads spot symbols from `exchangeInfo` and keeps the ones that:
//! - are quoted in the requested currency
//! - are in `TRADING` status
//! - allow spot trading
//!
//! Binance is the only exchange here that publishes onboarding dates, so
//! its pairs are the ones that seed the run's listing dates.

use super::common::{BINANCE, find_filter_value};
use crate::domain::errors::ListingError;
use crate::domain::ports::ListingSource;
use crate::domain::trading::types::dedup_pairs;
use crate::domain::trading::{Exchange, ListingDate, PairPrecision, TradingPair};
use crate::infrastructure::core::get_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

pub struct BinanceListingSource {
    client: Client,
    base_url: String,
}

impl BinanceListingSource {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ListingSource for BinanceListingSource {
    fn exchange(&self) -> Exchange {
        Exchange::Binance
    }

    async fn fetch_pairs(&self, quote: &str) -> Result<Vec<TradingPair>, ListingError> {
        info!("BinanceListingSource: Fetching {} pairs from exchangeInfo", quote);

        let url = format!("{}/api/v3/exchangeInfo", self.base_url);
        let payload = get_json(&self.client, BINANCE, &url).await?;
        let pairs = parse_exchange_info(payload, quote)?;

        info!(
            "BinanceListingSource: Found {} tradable {} pairs",
            pairs.len(),
            quote
        );
        Ok(pairs)
    }
}

#[derive(Debug, Deserialize)]
struct SymbolInfo {
    symbol: String,
    status: String,
    #[serde(rename = "baseAsset")]
    base_asset: String,
    #[serde(rename = "quoteAsset")]
    quote_asset: String,
    #[serde(rename = "isSpotTradingAllowed", default)]
    is_spot_trading_allowed: bool,
    #[serde(rename = "onboardDate", default)]
    onboard_date: Option<i64>,
    #[serde(default)]
    filters: Vec<Value>,
}

/// Normalizes an `exchangeInfo` payload into the pairs quoted in `quote`.
pub fn parse_exchange_info(payload: Value, quote: &str) -> Result<Vec<TradingPair>, ListingError> {
    let Value::Object(mut root) = payload else {
        return Err(ListingError::format(BINANCE, "expected a JSON object"));
    };
    let symbols = root
        .remove("symbols")
        .ok_or_else(|| ListingError::format(BINANCE, "missing field `symbols`"))?;
    let symbols: Vec<SymbolInfo> = serde_json::from_value(symbols)
        .map_err(|e| ListingError::format(BINANCE, format!("malformed `symbols`: {}", e)))?;

    let total = symbols.len();
    let pairs: Vec<TradingPair> = symbols
        .into_iter()
        .filter(|s| s.quote_asset == quote && s.status == "TRADING" && s.is_spot_trading_allowed)
        .map(into_pair)
        .collect();

    debug!(
        "BinanceListingSource: {} of {} symbols matched {}",
        pairs.len(),
        total,
        quote
    );
    Ok(dedup_pairs(pairs))
}

fn into_pair(info: SymbolInfo) -> TradingPair {
    let precision = PairPrecision {
        tick_size: find_filter_value(&info.filters, "PRICE_FILTER", "tickSize"),
        min_qty: find_filter_value(&info.filters, "LOT_SIZE", "minQty"),
        step_size: find_filter_value(&info.filters, "LOT_SIZE", "stepSize"),
    };
    let listing_date = info
        .onboard_date
        .map(ListingDate::from_epoch_millis)
        .unwrap_or(ListingDate::Unknown);

    TradingPair::new(&info.symbol, &info.base_asset, &info.quote_asset)
        .with_listing_date(listing_date)
        .with_precision(precision)
}

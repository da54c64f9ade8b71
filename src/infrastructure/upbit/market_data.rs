//! Upbit Listing Source
//!
//! `/v1/market/all` returns every market (KRW, USDT and BTC) in one array.
//! The array is fetched once per source and filtered per quote currency;
//! a failed fetch is remembered as well, so it is reported once per quote
//! without hitting the exchange again.

use crate::domain::errors::ListingError;
use crate::domain::ports::ListingSource;
use crate::domain::trading::types::{PAIR_SEPARATOR, dedup_pairs};
use crate::domain::trading::{Exchange, TradingPair};
use crate::infrastructure::core::get_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::info;

const UPBIT: &str = "Upbit";

#[derive(Debug, Clone, Deserialize)]
pub struct UpbitMarket {
    pub market: String,
    #[serde(default)]
    pub korean_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub market_warning: Option<String>,
}

pub struct UpbitListingSource {
    client: Client,
    base_url: String,
    markets: OnceCell<Result<Vec<UpbitMarket>, ListingError>>,
}

impl UpbitListingSource {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            markets: OnceCell::new(),
        }
    }

    async fn markets(&self) -> Result<&[UpbitMarket], ListingError> {
        match self.markets.get_or_init(|| self.fetch_markets()).await {
            Ok(markets) => Ok(markets.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    async fn fetch_markets(&self) -> Result<Vec<UpbitMarket>, ListingError> {
        info!("UpbitListingSource: Fetching market list");
        let url = format!("{}/v1/market/all", self.base_url);
        let payload = get_json(&self.client, UPBIT, &url).await?;
        let markets = parse_market_list(payload)?;
        info!("UpbitListingSource: Received {} markets", markets.len());
        Ok(markets)
    }
}

#[async_trait]
impl ListingSource for UpbitListingSource {
    fn exchange(&self) -> Exchange {
        Exchange::Upbit
    }

    async fn fetch_pairs(&self, quote: &str) -> Result<Vec<TradingPair>, ListingError> {
        let markets = self.markets().await?;
        let pairs = pairs_for_quote(markets, quote);
        info!("UpbitListingSource: Found {} {} pairs", pairs.len(), quote);
        Ok(pairs)
    }
}

/// Parses the `/v1/market/all` array.
pub fn parse_market_list(payload: Value) -> Result<Vec<UpbitMarket>, ListingError> {
    if !payload.is_array() {
        return Err(ListingError::format(UPBIT, "expected a JSON array of markets"));
    }
    serde_json::from_value(payload)
        .map_err(|e| ListingError::format(UPBIT, format!("malformed market entry: {}", e)))
}

/// Markets whose code starts with `{quote}-`, normalized.
pub fn pairs_for_quote(markets: &[UpbitMarket], quote: &str) -> Vec<TradingPair> {
    let prefix = format!("{}{}", quote, PAIR_SEPARATOR);
    let pairs = markets
        .iter()
        .filter(|m| m.market.starts_with(&prefix))
        .map(|m| {
            TradingPair::from_pair_code(&m.market)
                .with_names(m.korean_name.clone(), m.english_name.clone())
                .with_market_warning(m.market_warning.clone())
        })
        .collect();
    dedup_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_markets() -> Vec<UpbitMarket> {
        parse_market_list(json!([
            {"market": "KRW-BTC", "korean_name": "비트코인", "english_name": "Bitcoin", "market_warning": "NONE"},
            {"market": "KRW-ETH", "korean_name": "이더리움", "english_name": "Ethereum"},
            {"market": "BTC-ETH", "korean_name": "이더리움", "english_name": "Ethereum"},
            {"market": "USDT-BTC", "korean_name": "비트코인", "english_name": "Bitcoin"},
            {"market": "KRW-SOME-COIN", "korean_name": "섬코인", "english_name": "Some Coin"},
            {"market": "KRW-BTC", "korean_name": "비트코인", "english_name": "Bitcoin"},
            {"market": "KRWX-FOO"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_filters_by_quote_prefix() {
        let markets = sample_markets();

        let krw = pairs_for_quote(&markets, "KRW");
        let codes: Vec<&str> = krw.iter().map(|p| p.pair_code.as_str()).collect();
        assert_eq!(codes, vec!["KRW-BTC", "KRW-ETH", "KRW-SOME-COIN"]);

        assert_eq!(pairs_for_quote(&markets, "BTC").len(), 1);
        assert_eq!(pairs_for_quote(&markets, "USDT")[0].base_asset, "BTC");
        assert!(pairs_for_quote(&markets, "EUR").is_empty());
    }

    #[test]
    fn test_names_and_warning_are_carried() {
        let markets = sample_markets();
        let krw = pairs_for_quote(&markets, "KRW");

        assert_eq!(krw[0].display_name_local.as_deref(), Some("비트코인"));
        assert_eq!(krw[0].display_name_english.as_deref(), Some("Bitcoin"));
        assert_eq!(krw[0].market_warning.as_deref(), Some("NONE"));
        assert_eq!(krw[1].market_warning, None);
    }

    #[test]
    fn test_multi_segment_code_keeps_second_segment() {
        let markets = sample_markets();
        let krw = pairs_for_quote(&markets, "KRW");
        assert_eq!(krw[2].base_asset, "SOME");
        assert_eq!(krw[2].quote_asset, "KRW");
    }

    #[test]
    fn test_non_array_payload_is_format_error() {
        let err = parse_market_list(json!({"error": {"name": "404", "message": "Not found"}}))
            .unwrap_err();
        assert!(matches!(err, ListingError::UpstreamFormat { .. }));

        let err = parse_market_list(json!([{"korean_name": "비트코인"}])).unwrap_err();
        assert!(matches!(err, ListingError::UpstreamFormat { .. }));
    }

    #[tokio::test]
    async fn test_failure_is_cached_per_source() {
        let client = Client::new();
        let source = UpbitListingSource::new(client, "http://127.0.0.1:9".to_string());

        let first = source.fetch_pairs("KRW").await.unwrap_err();
        let second = source.fetch_pairs("BTC").await.unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first, ListingError::UpstreamUnavailable { .. }));
    }
}

use super::listing_date::ListingDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Separator used by Upbit market codes and by the synthetic Bithumb codes.
pub const PAIR_SEPARATOR: char = '-';

/// Price and lot constraints published by Binance for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairPrecision {
    pub tick_size: String,
    pub min_qty: String,
    pub step_size: String,
}

/// A market listed on an exchange, normalized across exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingPair {
    pub pair_code: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub display_name_local: Option<String>,
    pub display_name_english: Option<String>,
    pub market_warning: Option<String>,
    pub listing_date: ListingDate,
    pub precision: Option<PairPrecision>,
}

impl TradingPair {
    /// Builds a pair from a `QUOTE-BASE` code such as `KRW-BTC`.
    pub fn from_pair_code(pair_code: &str) -> Self {
        let (quote_asset, base_asset) = split_pair_code(pair_code);
        Self::new(pair_code, base_asset, quote_asset)
    }

    pub fn new(pair_code: &str, base_asset: &str, quote_asset: &str) -> Self {
        Self {
            pair_code: pair_code.to_string(),
            base_asset: base_asset.to_string(),
            quote_asset: quote_asset.to_string(),
            display_name_local: None,
            display_name_english: None,
            market_warning: None,
            listing_date: ListingDate::Unknown,
            precision: None,
        }
    }

    pub fn with_names(mut self, local: Option<String>, english: Option<String>) -> Self {
        self.display_name_local = local.filter(|s| !s.is_empty());
        self.display_name_english = english.filter(|s| !s.is_empty());
        self
    }

    pub fn with_market_warning(mut self, warning: Option<String>) -> Self {
        self.market_warning = warning.filter(|s| !s.is_empty());
        self
    }

    pub fn with_listing_date(mut self, listing_date: ListingDate) -> Self {
        self.listing_date = listing_date;
        self
    }

    pub fn with_precision(mut self, precision: PairPrecision) -> Self {
        self.precision = Some(precision);
        self
    }
}

// ===== Pair Code Normalization =====

/// Splits a `QUOTE-BASE` pair code into `(quote, base)`.
///
/// The base is always the second segment, whatever follows it is dropped:
/// `"KRW-SOME-COIN"` yields `("KRW", "SOME")`. A code without separator is
/// treated as a bare quote with an empty base.
///
/// # Examples
/// ```
/// use listing_recon::domain::trading::types::split_pair_code;
///
/// assert_eq!(split_pair_code("KRW-BTC"), ("KRW", "BTC"));
/// assert_eq!(split_pair_code("KRW-SOME-COIN"), ("KRW", "SOME"));
/// ```
pub fn split_pair_code(pair_code: &str) -> (&str, &str) {
    let mut segments = pair_code.split(PAIR_SEPARATOR);
    let quote = segments.next().unwrap_or_default();
    let base = segments.next().unwrap_or_default();
    (quote, base)
}

/// Builds the `QUOTE-BASE` code used for exchanges that only report the base.
pub fn join_pair_code(quote: &str, base: &str) -> String {
    format!("{}{}{}", quote, PAIR_SEPARATOR, base)
}

/// Drops repeated pair codes, keeping the first occurrence in place.
pub fn dedup_pairs(pairs: Vec<TradingPair>) -> Vec<TradingPair> {
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.pair_code.clone()))
        .collect()
}

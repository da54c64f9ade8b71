//! In-memory listing source for pipeline tests.

use crate::domain::errors::ListingError;
use crate::domain::ports::ListingSource;
use crate::domain::trading::types::join_pair_code;
use crate::domain::trading::{Exchange, TradingPair};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

pub struct MockListingSource {
    exchange: Exchange,
    listings: HashMap<String, Result<Vec<TradingPair>, ListingError>>,
    calls: AtomicUsize,
}

impl MockListingSource {
    pub fn new(exchange: Exchange) -> Self {
        Self {
            exchange,
            listings: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_pairs(mut self, quote: &str, pairs: Vec<TradingPair>) -> Self {
        self.listings.insert(quote.to_string(), Ok(pairs));
        self
    }

    /// Shorthand for `{quote}-{base}` pairs with no metadata.
    pub fn with_bases(self, quote: &str, bases: &[&str]) -> Self {
        let pairs = bases
            .iter()
            .map(|base| TradingPair::from_pair_code(&join_pair_code(quote, base)))
            .collect();
        self.with_pairs(quote, pairs)
    }

    pub fn with_failure(mut self, quote: &str, error: ListingError) -> Self {
        self.listings.insert(quote.to_string(), Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    fn exchange(&self) -> Exchange {
        self.exchange
    }

    async fn fetch_pairs(&self, quote: &str) -> Result<Vec<TradingPair>, ListingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!("MockListingSource: {} {} requested", self.exchange, quote);
        // Unconfigured quotes behave like an empty market.
        self.listings
            .get(quote)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

use crate::config::Config;
use crate::domain::ports::ListingSource;
use crate::infrastructure::binance::BinanceListingSource;
use crate::infrastructure::bithumb::BithumbListingSource;
use crate::infrastructure::core::HttpClientFactory;
use crate::infrastructure::upbit::UpbitListingSource;
use anyhow::{Context, Result};
use std::sync::Arc;

/// The three listing sources a report reads from.
#[derive(Clone)]
pub struct ListingSources {
    pub binance: Arc<dyn ListingSource>,
    pub upbit: Arc<dyn ListingSource>,
    pub bithumb: Arc<dyn ListingSource>,
}

pub struct SourceFactory;

impl SourceFactory {
    /// Live sources sharing one HTTP client.
    pub fn create_sources(config: &Config) -> Result<ListingSources> {
        let exchanges = &config.exchanges;
        let client = HttpClientFactory::create_client(exchanges)
            .context("Failed to build HTTP client")?;

        Ok(ListingSources {
            binance: Arc::new(BinanceListingSource::new(
                client.clone(),
                exchanges.binance_base_url.clone(),
            )),
            upbit: Arc::new(UpbitListingSource::new(
                client.clone(),
                exchanges.upbit_base_url.clone(),
            )),
            bithumb: Arc::new(BithumbListingSource::new(
                client,
                exchanges.bithumb_base_url.clone(),
            )),
        })
    }
}

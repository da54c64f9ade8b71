use crate::domain::errors::{ListingError, SinkError};
use crate::domain::report::Table;
use crate::domain::trading::{Exchange, TradingPair};
use async_trait::async_trait;
use std::path::PathBuf;

/// One exchange's public listing endpoint.
#[async_trait]
pub trait ListingSource: Send + Sync {
    fn exchange(&self) -> Exchange;

    /// Pairs quoted in `quote`, deduplicated, in the exchange's own order.
    async fn fetch_pairs(&self, quote: &str) -> Result<Vec<TradingPair>, ListingError>;
}

/// Destination for the tables of one report.
pub trait TableSink {
    fn write_table(&mut self, table: &Table) -> Result<(), SinkError>;

    /// Flushes everything and returns where the output landed.
    fn finish(self: Box<Self>) -> Result<PathBuf, SinkError>;
}

use crate::domain::ports::ListingSource;
use crate::domain::trading::TradingPair;
use tracing::warn;

/// Fetches one market, degrading to an empty listing on failure.
///
/// A report keeps going when an exchange is down; the missing exchange
/// simply contributes nothing to the comparisons.
pub async fn fetch_or_empty(source: &dyn ListingSource, quote: &str) -> Vec<TradingPair> {
    match source.fetch_pairs(quote).await {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!(
                "Failed to fetch {} listing, continuing with none: {}",
                source.exchange().market_label(quote),
                e
            );
            Vec::new()
        }
    }
}

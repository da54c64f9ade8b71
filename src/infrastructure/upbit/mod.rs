pub mod market_data;

pub use market_data::{UpbitListingSource, UpbitMarket, pairs_for_quote, parse_market_list};

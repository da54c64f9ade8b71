pub mod market_data;

pub use market_data::{BithumbListingSource, parse_ticker_all};

pub mod exchange;
pub mod listing_date;
pub mod types;

pub use exchange::Exchange;
pub use listing_date::{ListingDate, ListingDates};
pub use types::{PairPrecision, TradingPair};

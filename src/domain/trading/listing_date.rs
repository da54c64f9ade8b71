//! Listing dates and the output ordering built on them.
//!
//! Only Binance publishes when a symbol was onboarded. Its dates are
//! collected into a [`ListingDates`] value once all fetches are done and
//! handed to whoever needs to order pairs; assets it does not know about
//! read as [`ListingDate::Unknown`] and sort last.

use super::types::TradingPair;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// When a pair was listed, if the exchange told us.
///
/// Variant order matters: every `Known` date compares less than `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ListingDate {
    Known(NaiveDate),
    #[default]
    Unknown,
}

impl ListingDate {
    /// Converts an epoch timestamp in milliseconds to a UTC calendar date.
    pub fn from_epoch_millis(millis: i64) -> Self {
        DateTime::from_timestamp_millis(millis)
            .map(|dt| ListingDate::Known(dt.date_naive()))
            .unwrap_or(ListingDate::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ListingDate::Known(_))
    }
}

impl fmt::Display for ListingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingDate::Known(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            ListingDate::Unknown => write!(f, "unknown"),
        }
    }
}

/// Base asset -> listing date, gathered from one exchange during a run.
#[derive(Debug, Clone, Default)]
pub struct ListingDates {
    dates: HashMap<String, ListingDate>,
}

impl ListingDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the known dates carried by `pairs`. The first known date
    /// seen for an asset wins.
    pub fn from_pairs(pairs: &[TradingPair]) -> Self {
        let mut dates = Self::new();
        for pair in pairs {
            dates.record(&pair.base_asset, pair.listing_date);
        }
        dates
    }

    pub fn record(&mut self, base_asset: &str, date: ListingDate) {
        if !date.is_known() {
            return;
        }
        self.dates.entry(base_asset.to_string()).or_insert(date);
    }

    pub fn get(&self, base_asset: &str) -> ListingDate {
        self.dates
            .get(base_asset)
            .copied()
            .unwrap_or(ListingDate::Unknown)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Fills in `listing_date` on pairs that don't carry one yet.
    pub fn annotate(&self, pairs: &mut [TradingPair]) {
        for pair in pairs.iter_mut() {
            if !pair.listing_date.is_known() {
                pair.listing_date = self.get(&pair.base_asset);
            }
        }
    }

    /// Ascending by listing date, unknown last, ties by pair code.
    ///
    /// With no dates at all this is a plain pair-code sort.
    pub fn sort_pairs(&self, pairs: &mut [TradingPair]) {
        pairs.sort_by(|a, b| {
            self.effective_date(a)
                .cmp(&self.effective_date(b))
                .then_with(|| a.pair_code.cmp(&b.pair_code))
        });
    }

    /// Annotates and sorts in one go; what every pair table goes through.
    pub fn order(&self, mut pairs: Vec<TradingPair>) -> Vec<TradingPair> {
        self.annotate(&mut pairs);
        self.sort_pairs(&mut pairs);
        pairs
    }

    fn effective_date(&self, pair: &TradingPair) -> ListingDate {
        if pair.listing_date.is_known() {
            pair.listing_date
        } else {
            self.get(&pair.base_asset)
        }
    }
}

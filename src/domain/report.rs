//! Tabular output handed to a sink: a name, column labels and string rows.

use crate::domain::reconciliation::AssetSet;
use crate::domain::trading::TradingPair;

pub const PAIR_COLUMNS: &[&str] = &[
    "Pair Code",
    "Base Asset",
    "Quote Asset",
    "Local Name",
    "English Name",
    "Market Warning",
    "Listing Date",
];

pub const PRECISION_COLUMNS: &[&str] = &["Price Precision", "Min Qty", "Qty Precision"];

pub const ASSET_COLUMN: &str = "Asset";

const NOT_AVAILABLE: &str = "N/A";

/// One output sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Pair table with the standard columns, rows in the given order.
    pub fn from_pairs(name: impl Into<String>, pairs: &[TradingPair]) -> Self {
        let mut table = Self::new(name, PAIR_COLUMNS);
        table.rows = pairs.iter().map(pair_row).collect();
        table
    }

    /// Pair table that also carries the Binance precision columns.
    pub fn from_pairs_with_precision(name: impl Into<String>, pairs: &[TradingPair]) -> Self {
        let columns: Vec<&str> = PAIR_COLUMNS
            .iter()
            .chain(PRECISION_COLUMNS.iter())
            .copied()
            .collect();
        let mut table = Self::new(name, &columns);
        table.rows = pairs
            .iter()
            .map(|pair| {
                let mut row = pair_row(pair);
                match &pair.precision {
                    Some(p) => {
                        row.extend([p.tick_size.clone(), p.min_qty.clone(), p.step_size.clone()])
                    }
                    None => row.extend(std::iter::repeat_n(NOT_AVAILABLE.to_string(), 3)),
                }
                row
            })
            .collect();
        table
    }

    /// Single-column table listing the set's assets in ascending order.
    pub fn from_asset_set(name: impl Into<String>, column: &str, set: &AssetSet) -> Self {
        Self::single_column(name, column, set.iter().map(str::to_string))
    }

    pub fn single_column<I>(name: impl Into<String>, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::new(name, &[column]);
        table.rows = values.into_iter().map(|v| vec![v]).collect();
        table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width per column: longest cell or header, plus padding.
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                longest.max(header.chars().count()) + 2
            })
            .collect()
    }
}

fn pair_row(pair: &TradingPair) -> Vec<String> {
    vec![
        pair.pair_code.clone(),
        pair.base_asset.clone(),
        pair.quote_asset.clone(),
        pair.display_name_local.clone().unwrap_or_default(),
        pair.display_name_english.clone().unwrap_or_default(),
        pair.market_warning.clone().unwrap_or_default(),
        pair.listing_date.to_string(),
    ]
}

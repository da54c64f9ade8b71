//! Raw listings of the three compared markets, one sheet each.

use super::{Report, ReportKind};
use crate::application::fetch::fetch_or_empty;
use crate::domain::report::Table;
use crate::domain::trading::ListingDates;
use crate::domain::trading::exchange::quote::{KRW, USDT};
use crate::infrastructure::ListingSources;
use anyhow::Result;

pub async fn build(sources: &ListingSources) -> Result<Report> {
    let (binance_usdt, mut upbit_krw, mut bithumb_krw) = tokio::join!(
        fetch_or_empty(sources.binance.as_ref(), USDT),
        fetch_or_empty(sources.upbit.as_ref(), KRW),
        fetch_or_empty(sources.bithumb.as_ref(), KRW),
    );

    // Exchange order is kept; only the dates are filled in.
    let dates = ListingDates::from_pairs(&binance_usdt);
    dates.annotate(&mut upbit_krw);
    dates.annotate(&mut bithumb_krw);

    let tables = vec![
        Table::from_pairs_with_precision("Binance_USDT", &binance_usdt),
        Table::from_pairs("Upbit_KRW", &upbit_krw),
        Table::from_pairs("Bithumb_KRW", &bithumb_krw),
    ];
    Ok(Report::new(ReportKind::Listings, tables))
}

//! Upbit against Bithumb on market-exclusive assets.
//!
//! For each of KRW and BTC, an asset is "exclusive" on an exchange when it
//! trades there only on that market. The sheets list, by base asset, the
//! exclusives of one exchange that are not exclusives of the other.

use super::bithumb::compare_markets;
use super::upbit::UpbitBreakdown;
use super::{Report, ReportKind};
use crate::application::fetch::fetch_or_empty;
use crate::domain::reconciliation::symmetric_exclusive;
use crate::domain::report::Table;
use crate::domain::trading::exchange::quote::{BTC, KRW, USDT};
use crate::infrastructure::ListingSources;
use anyhow::{Context, Result};

pub async fn build(sources: &ListingSources) -> Result<Report> {
    let upbit_source = sources.upbit.as_ref();
    let bithumb_source = sources.bithumb.as_ref();
    let (upbit_krw, upbit_usdt, upbit_btc, bithumb_krw, bithumb_btc) = tokio::join!(
        fetch_or_empty(upbit_source, KRW),
        fetch_or_empty(upbit_source, USDT),
        fetch_or_empty(upbit_source, BTC),
        fetch_or_empty(bithumb_source, KRW),
        fetch_or_empty(bithumb_source, BTC),
    );

    let upbit = UpbitBreakdown::new(upbit_krw, upbit_usdt, upbit_btc)
        .context("Failed to reconcile Upbit markets")?;
    let bithumb = compare_markets(&bithumb_krw, &bithumb_btc);

    let results = [
        symmetric_exclusive("upbit_krw_only", &upbit.only_krw, &[&bithumb.only_in_a]),
        symmetric_exclusive("bithumb_krw_only", &bithumb.only_in_a, &[&upbit.only_krw]),
        symmetric_exclusive("upbit_btc_only", &upbit.only_btc, &[&bithumb.only_in_b]),
        symmetric_exclusive("bithumb_btc_only", &bithumb.only_in_b, &[&upbit.only_btc]),
    ];

    let tables = results
        .iter()
        .map(|set| Table::from_asset_set(set.label(), set.label(), set))
        .collect();
    Ok(Report::new(ReportKind::KoreaDiff, tables))
}

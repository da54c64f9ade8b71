//! The full cross-exchange analysis.
//!
//! Binance is compared on its USDT market, Bithumb on KRW, and Upbit on the
//! union of its KRW, USDT and BTC markets. A second-order comparison then
//! sets the assets Binance and Bithumb share outside Upbit KRW against the
//! assets Upbit offers on USDT and BTC but not KRW.

use super::overlap::ExchangeOverlap;
use super::upbit::UpbitBreakdown;
use super::{Report, ReportKind};
use crate::application::fetch::fetch_or_empty;
use crate::domain::reconciliation::{AssetSet, CrossComparison, present_in_absent_from};
use crate::domain::report::Table;
use crate::domain::trading::exchange::quote::{BTC, KRW, USDT};
use crate::domain::trading::ListingDates;
use crate::infrastructure::ListingSources;
use anyhow::{Context, Result};
use tracing::info;

const UPBIT_SHEETS: [&str; 8] = [
    "Upbit_KRW_pairs",
    "Upbit_USDT_pairs",
    "Upbit_BTC_pairs",
    "Upbit_only_KRW",
    "Upbit_only_USDT",
    "Upbit_only_BTC",
    "Upbit_all_markets",
    "Upbit_USDT_BTC_not_KRW",
];

const EXCHANGE_SHEETS: [&str; 7] = [
    "All_Exchanges",
    "Only_Binance",
    "Only_Upbit",
    "Only_Bithumb",
    "Binance_Upbit",
    "Binance_Bithumb",
    "Bithumb_Upbit",
];

pub async fn build(sources: &ListingSources) -> Result<Report> {
    let upbit_source = sources.upbit.as_ref();
    let (binance_usdt, bithumb_krw, upbit_krw, upbit_usdt, upbit_btc) = tokio::join!(
        fetch_or_empty(sources.binance.as_ref(), USDT),
        fetch_or_empty(sources.bithumb.as_ref(), KRW),
        fetch_or_empty(upbit_source, KRW),
        fetch_or_empty(upbit_source, USDT),
        fetch_or_empty(upbit_source, BTC),
    );

    let dates = ListingDates::from_pairs(&binance_usdt);
    info!("Collected {} listing dates from Binance", dates.len());

    let upbit = UpbitBreakdown::new(upbit_krw, upbit_usdt, upbit_btc)
        .context("Failed to reconcile Upbit markets")?;

    let binance_set = AssetSet::from_pairs("Binance", &binance_usdt);
    let bithumb_set = AssetSet::from_pairs("Bithumb", &bithumb_krw);
    let upbit_set = upbit.exchange_set("Upbit");
    let overlap = ExchangeOverlap::compute(&binance_set, &upbit_set, &bithumb_set)
        .context("Failed to reconcile exchanges")?;
    info!(
        "Exchange overlap: {} assets in total, {} on all three",
        overlap.union_len(),
        overlap.all.len()
    );

    let binance_bithumb = present_in_absent_from(
        "Binance_Bithumb",
        &[&binance_set, &bithumb_set],
        &[&upbit.krw_set],
    );
    let upbit_usdt_btc = upbit.usdt_btc_not_krw.clone().renamed("Upbit_USDT_BTC");
    let second_order = CrossComparison::compare(&binance_bithumb, &upbit_usdt_btc);

    let mut tables = Vec::with_capacity(2 + UPBIT_SHEETS.len() + EXCHANGE_SHEETS.len() + 3);
    tables.push(Table::from_pairs_with_precision(
        "Binance_USDT_pairs",
        &dates.order(binance_usdt),
    ));
    tables.push(Table::from_pairs(
        "Bithumb_KRW_pairs",
        &dates.order(bithumb_krw),
    ));
    tables.extend(upbit.pair_tables(UPBIT_SHEETS, &dates));
    tables.extend(overlap.tables(EXCHANGE_SHEETS));
    tables.push(Table::from_asset_set(
        "Common_Pairs",
        "Common Pairs",
        &second_order.common_to_both,
    ));
    tables.push(Table::from_asset_set(
        "Only_Binance_Bithumb",
        "Only in Binance_Bithumb",
        &second_order.only_in_a,
    ));
    tables.push(Table::from_asset_set(
        "Only_Upbit_USDT_BTC",
        "Only in Upbit_USDT_BTC",
        &second_order.only_in_b,
    ));

    Ok(Report::new(ReportKind::Analysis, tables))
}

//! Seven-way overlap of Binance USDT, Upbit KRW and Bithumb KRW.

use super::overlap::ExchangeOverlap;
use super::{Report, ReportKind};
use crate::application::fetch::fetch_or_empty;
use crate::domain::reconciliation::AssetSet;
use crate::domain::trading::exchange::quote::{KRW, USDT};
use crate::infrastructure::ListingSources;
use anyhow::{Context, Result};
use tracing::info;

const SHEETS: [&str; 7] = [
    "ALL",
    "only_ba",
    "only_upbit",
    "only_bithumb",
    "ba_upbit",
    "ba_bithumb",
    "upbit_bithumb",
];

pub async fn build(sources: &ListingSources) -> Result<Report> {
    let (binance_usdt, upbit_krw, bithumb_krw) = tokio::join!(
        fetch_or_empty(sources.binance.as_ref(), USDT),
        fetch_or_empty(sources.upbit.as_ref(), KRW),
        fetch_or_empty(sources.bithumb.as_ref(), KRW),
    );

    let overlap = ExchangeOverlap::compute(
        &AssetSet::from_pairs("Binance", &binance_usdt),
        &AssetSet::from_pairs("Upbit", &upbit_krw),
        &AssetSet::from_pairs("Bithumb", &bithumb_krw),
    )
    .context("Failed to reconcile exchanges")?;
    info!(
        "Exchange overlap: {} assets in total, {} on all three",
        overlap.union_len(),
        overlap.all.len()
    );

    Ok(Report::new(ReportKind::Compare, overlap.tables(SHEETS)))
}

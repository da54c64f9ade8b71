//! Bithumb KRW market against its BTC market.
//!
//! Sheets hold pair codes rather than assets; an asset on both markets is
//! written as `KRW-X, BTC-X`.

use super::{Report, ReportKind};
use crate::application::fetch::fetch_or_empty;
use crate::domain::reconciliation::{AssetSet, CrossComparison};
use crate::domain::report::Table;
use crate::domain::trading::TradingPair;
use crate::domain::trading::exchange::quote::{BTC, KRW};
use crate::domain::trading::types::join_pair_code;
use crate::infrastructure::ListingSources;
use anyhow::Result;
use tracing::info;

/// Bithumb's KRW and BTC markets compared by base asset.
pub fn compare_markets(krw: &[TradingPair], btc: &[TradingPair]) -> CrossComparison {
    CrossComparison::compare(
        &AssetSet::from_pairs(KRW, krw),
        &AssetSet::from_pairs(BTC, btc),
    )
}

fn codes(pairs: &[TradingPair]) -> impl Iterator<Item = String> + '_ {
    pairs.iter().map(|p| p.pair_code.clone())
}

fn pair_table(name: &str, quote: &str, set: &AssetSet) -> Table {
    Table::single_column(name, name, set.iter().map(|asset| join_pair_code(quote, asset)))
}

pub async fn build(sources: &ListingSources) -> Result<Report> {
    let bithumb = sources.bithumb.as_ref();
    let (krw, btc) = tokio::join!(fetch_or_empty(bithumb, KRW), fetch_or_empty(bithumb, BTC));

    let markets = compare_markets(&krw, &btc);
    info!(
        "Bithumb markets: {} KRW only, {} BTC only, {} on both",
        markets.only_in_a.len(),
        markets.only_in_b.len(),
        markets.common_to_both.len()
    );

    let both = markets.common_to_both.iter().map(|asset| {
        format!(
            "{}, {}",
            join_pair_code(KRW, asset),
            join_pair_code(BTC, asset)
        )
    });

    let tables = vec![
        Table::single_column("KRW_pairs", "KRW_pairs", codes(&krw)),
        Table::single_column("BTC_pairs", "BTC_pairs", codes(&btc)),
        pair_table("only_KRW", KRW, &markets.only_in_a),
        pair_table("only_BTC", BTC, &markets.only_in_b),
        Table::single_column("both_markets", "both_markets", both),
    ];
    Ok(Report::new(ReportKind::Bithumb, tables))
}

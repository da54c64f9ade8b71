use super::{Report, ReportKind};
use crate::application::fetch::fetch_or_empty;
use crate::domain::errors::ReconcileError;
use crate::domain::reconciliation::{
    AssetSet, Reconciler, ResultSet, present_in_absent_from, select_pairs,
};
use crate::domain::report::Table;
use crate::domain::trading::exchange::quote::{BTC, KRW, USDT};
use crate::domain::trading::{ListingDates, TradingPair};
use crate::infrastructure::ListingSources;
use anyhow::{Context, Result};
use tracing::info;

pub const SHEETS: [&str; 8] = [
    "KRW_pairs",
    "USDT_pairs",
    "BTC_pairs",
    "only_KRW_pairs",
    "only_USDT_pairs",
    "only_BTC_pairs",
    "all_markets_pairs",
    "usdt_btc_not_krw_pairs",
];

/// Upbit's KRW, USDT and BTC markets reconciled against each other.
#[derive(Debug, Clone)]
pub struct UpbitBreakdown {
    pub krw: Vec<TradingPair>,
    pub usdt: Vec<TradingPair>,
    pub btc: Vec<TradingPair>,
    pub krw_set: AssetSet,
    pub usdt_set: AssetSet,
    pub btc_set: AssetSet,
    pub only_krw: ResultSet,
    pub only_usdt: ResultSet,
    pub only_btc: ResultSet,
    pub all_markets: ResultSet,
    pub usdt_btc_not_krw: ResultSet,
}

impl UpbitBreakdown {
    pub fn new(
        krw: Vec<TradingPair>,
        usdt: Vec<TradingPair>,
        btc: Vec<TradingPair>,
    ) -> Result<Self, ReconcileError> {
        let krw_set = AssetSet::from_pairs(KRW, &krw);
        let usdt_set = AssetSet::from_pairs(USDT, &usdt);
        let btc_set = AssetSet::from_pairs(BTC, &btc);

        let markets = Reconciler::new(&[&krw_set, &usdt_set, &btc_set])?;
        let only_krw = markets.only_in(KRW)?;
        let only_usdt = markets.only_in(USDT)?;
        let only_btc = markets.only_in(BTC)?;
        let all_markets = markets.all_common();
        let usdt_btc_not_krw =
            present_in_absent_from("USDT_BTC_not_KRW", &[&usdt_set, &btc_set], &[&krw_set]);

        Ok(Self {
            krw,
            usdt,
            btc,
            krw_set,
            usdt_set,
            btc_set,
            only_krw,
            only_usdt,
            only_btc,
            all_markets,
            usdt_btc_not_krw,
        })
    }

    /// Every asset Upbit lists in any of the three markets.
    pub fn exchange_set(&self, label: &str) -> AssetSet {
        AssetSet::union_all(label, [&self.krw_set, &self.usdt_set, &self.btc_set])
    }

    /// The eight pair tables, ordered by `dates`.
    ///
    /// Sheet order: the three markets, the three only-in selections, assets
    /// on all markets (as KRW pairs), then USDT and BTC but not KRW (as USDT
    /// pairs).
    pub fn pair_tables(&self, names: [&str; 8], dates: &ListingDates) -> Vec<Table> {
        let selections = [
            self.krw.clone(),
            self.usdt.clone(),
            self.btc.clone(),
            select_pairs(&self.krw, &self.only_krw),
            select_pairs(&self.usdt, &self.only_usdt),
            select_pairs(&self.btc, &self.only_btc),
            select_pairs(&self.krw, &self.all_markets),
            select_pairs(&self.usdt, &self.usdt_btc_not_krw),
        ];
        names
            .iter()
            .zip(selections)
            .map(|(name, pairs)| Table::from_pairs(*name, &dates.order(pairs)))
            .collect()
    }
}

pub async fn build(sources: &ListingSources) -> Result<Report> {
    let upbit = sources.upbit.as_ref();
    let (krw, usdt, btc) = tokio::join!(
        fetch_or_empty(upbit, KRW),
        fetch_or_empty(upbit, USDT),
        fetch_or_empty(upbit, BTC),
    );

    let breakdown =
        UpbitBreakdown::new(krw, usdt, btc).context("Failed to reconcile Upbit markets")?;
    info!(
        "Upbit markets: {} KRW, {} USDT, {} BTC assets",
        breakdown.krw_set.len(),
        breakdown.usdt_set.len(),
        breakdown.btc_set.len()
    );

    // Upbit publishes no listing dates; pairs fall back to code order.
    let tables = breakdown.pair_tables(SHEETS, &ListingDates::new());
    Ok(Report::new(ReportKind::Upbit, tables))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(quote: &str, bases: &[&str]) -> Vec<TradingPair> {
        bases
            .iter()
            .map(|b| TradingPair::from_pair_code(&format!("{}-{}", quote, b)))
            .collect()
    }

    #[test]
    fn test_breakdown_selections() {
        let breakdown = UpbitBreakdown::new(
            pairs("KRW", &["BTC", "ETH", "XRP", "DOGE"]),
            pairs("USDT", &["BTC", "ETH", "TRX"]),
            pairs("BTC", &["ETH", "XRP", "TRX", "SNT"]),
        )
        .unwrap();

        assert_eq!(breakdown.only_krw.clone().into_sorted_vec(), vec!["DOGE"]);
        assert!(breakdown.only_usdt.is_empty());
        assert_eq!(breakdown.only_btc.clone().into_sorted_vec(), vec!["SNT"]);
        assert_eq!(breakdown.all_markets.clone().into_sorted_vec(), vec!["ETH"]);
        assert_eq!(breakdown.usdt_btc_not_krw.clone().into_sorted_vec(), vec!["TRX"]);
        assert_eq!(breakdown.exchange_set("Upbit").len(), 6);
    }

    #[test]
    fn test_pair_tables_use_market_of_selection() {
        let breakdown = UpbitBreakdown::new(
            pairs("KRW", &["ETH", "BTC"]),
            pairs("USDT", &["ETH", "TRX"]),
            pairs("BTC", &["ETH", "TRX"]),
        )
        .unwrap();

        let tables = breakdown.pair_tables(SHEETS, &ListingDates::new());
        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, SHEETS.to_vec());

        // sorted by code without dates
        assert_eq!(tables[0].rows[0][0], "KRW-BTC");
        assert_eq!(tables[6].rows, vec![tables[0].rows[1].clone()]);
        assert_eq!(tables[7].rows[0][0], "USDT-TRX");
        assert!(tables[4].is_empty());
    }
}

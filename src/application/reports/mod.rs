//! Report builders.
//!
//! Each report fetches the markets it needs concurrently, reconciles them
//! and returns the tables to write, in sheet order.

pub mod analysis;
pub mod bithumb;
pub mod compare;
pub mod korea_diff;
pub mod listings;
pub mod overlap;
pub mod upbit;

use crate::domain::report::Table;
use crate::infrastructure::ListingSources;
use anyhow::Result;
use clap::Subcommand;
use std::fmt;

pub use overlap::ExchangeOverlap;
pub use upbit::UpbitBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum ReportKind {
    /// Full cross-exchange analysis (default)
    #[default]
    Analysis,
    /// Raw listings of Binance USDT, Upbit KRW and Bithumb KRW
    Listings,
    /// Seven-way overlap of Binance USDT, Upbit KRW and Bithumb KRW
    Compare,
    /// Upbit KRW / USDT / BTC market breakdown
    Upbit,
    /// Bithumb KRW vs BTC market comparison
    Bithumb,
    /// Upbit vs Bithumb market-exclusive assets
    KoreaDiff,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::Analysis,
        ReportKind::Listings,
        ReportKind::Compare,
        ReportKind::Upbit,
        ReportKind::Bithumb,
        ReportKind::KoreaDiff,
    ];

    /// File name prefix of the report output.
    pub fn prefix(&self) -> &'static str {
        match self {
            ReportKind::Analysis => "Crypto_Exchange_Analysis",
            ReportKind::Listings => "Exchange_Listings",
            ReportKind::Compare => "Exchange_Listings_Results",
            ReportKind::Upbit => "upbit_pairs",
            ReportKind::Bithumb => "bithumb_market_comparison",
            ReportKind::KoreaDiff => "upbit_bithumb_result",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Analysis => "analysis",
            ReportKind::Listings => "listings",
            ReportKind::Compare => "compare",
            ReportKind::Upbit => "upbit",
            ReportKind::Bithumb => "bithumb",
            ReportKind::KoreaDiff => "korea-diff",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The tables of one report run, in sheet order.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: ReportKind,
    pub tables: Vec<Table>,
}

impl Report {
    pub fn new(kind: ReportKind, tables: Vec<Table>) -> Self {
        Self { kind, tables }
    }

    pub fn prefix(&self) -> &'static str {
        self.kind.prefix()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

pub async fn build_report(kind: ReportKind, sources: &ListingSources) -> Result<Report> {
    match kind {
        ReportKind::Analysis => analysis::build(sources).await,
        ReportKind::Listings => listings::build(sources).await,
        ReportKind::Compare => compare::build(sources).await,
        ReportKind::Upbit => upbit::build(sources).await,
        ReportKind::Bithumb => bithumb::build(sources).await,
        ReportKind::KoreaDiff => korea_diff::build(sources).await,
    }
}

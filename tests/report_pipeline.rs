use chrono::NaiveDate;
use listing_recon::application::reports::{ReportKind, build_report};
use listing_recon::application::{run_report, write_report};
use listing_recon::config::{OutputEnvConfig, OutputFormat};
use listing_recon::domain::errors::ListingError;
use listing_recon::domain::reconciliation::{AssetSet, CrossComparison};
use listing_recon::domain::report::Table;
use listing_recon::domain::trading::{Exchange, ListingDate, TradingPair};
use listing_recon::infrastructure::ListingSources;
use listing_recon::infrastructure::bithumb::parse_ticker_all;
use listing_recon::infrastructure::mock::MockListingSource;
use listing_recon::infrastructure::sink::CsvSink;
use listing_recon::infrastructure::upbit::{pairs_for_quote, parse_market_list};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn binance_pair(base: &str, onboard: Option<&str>) -> TradingPair {
    let date = onboard
        .map(|d| ListingDate::Known(NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()))
        .unwrap_or(ListingDate::Unknown);
    TradingPair::new(&format!("{}USDT", base), base, "USDT").with_listing_date(date)
}

fn upbit_mock() -> MockListingSource {
    MockListingSource::new(Exchange::Upbit)
        .with_bases("KRW", &["BTC", "ETH", "XRP", "SAND"])
        .with_bases("USDT", &["BTC", "ETH", "TRX", "ARB"])
        .with_bases("BTC", &["ETH", "XRP", "TRX", "ARB", "SNT"])
}

fn bithumb_mock() -> MockListingSource {
    MockListingSource::new(Exchange::Bithumb)
        .with_bases("KRW", &["BTC", "ETH", "ARB", "KLAY", "SOL"])
        .with_bases("BTC", &["ETH", "KLAY", "WEMIX"])
}

fn binance_mock() -> MockListingSource {
    MockListingSource::new(Exchange::Binance).with_pairs(
        "USDT",
        vec![
            binance_pair("BTC", Some("2017-08-17")),
            binance_pair("ARB", Some("2023-03-23")),
            binance_pair("SOL", Some("2020-08-11")),
            binance_pair("TRX", None),
            binance_pair("PEPE", Some("2023-05-05")),
        ],
    )
}

fn sources() -> ListingSources {
    ListingSources {
        binance: Arc::new(binance_mock()),
        upbit: Arc::new(upbit_mock()),
        bithumb: Arc::new(bithumb_mock()),
    }
}

fn column(table: &Table, idx: usize) -> Vec<&str> {
    table.rows.iter().map(|r| r[idx].as_str()).collect()
}

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("listing_recon_it_{}_{}", name, std::process::id()))
}

#[tokio::test]
async fn analysis_report_has_every_sheet_in_order() {
    let report = build_report(ReportKind::Analysis, &sources()).await.unwrap();

    assert_eq!(
        report.sheet_names(),
        vec![
            "Binance_USDT_pairs",
            "Bithumb_KRW_pairs",
            "Upbit_KRW_pairs",
            "Upbit_USDT_pairs",
            "Upbit_BTC_pairs",
            "Upbit_only_KRW",
            "Upbit_only_USDT",
            "Upbit_only_BTC",
            "Upbit_all_markets",
            "Upbit_USDT_BTC_not_KRW",
            "All_Exchanges",
            "Only_Binance",
            "Only_Upbit",
            "Only_Bithumb",
            "Binance_Upbit",
            "Binance_Bithumb",
            "Bithumb_Upbit",
            "Common_Pairs",
            "Only_Binance_Bithumb",
            "Only_Upbit_USDT_BTC",
        ]
    );
    assert_eq!(report.prefix(), "Crypto_Exchange_Analysis");
}

#[tokio::test]
async fn analysis_reconciles_exchanges() {
    let report = build_report(ReportKind::Analysis, &sources()).await.unwrap();
    let assets = |name: &str| column(report.table(name).unwrap(), 0);

    // Binance {BTC, ARB, SOL, TRX, PEPE}
    // Upbit   {BTC, ETH, XRP, SAND, TRX, ARB, SNT}
    // Bithumb {BTC, ETH, ARB, KLAY, SOL}
    assert_eq!(assets("All_Exchanges"), vec!["ARB", "BTC"]);
    assert_eq!(assets("Only_Binance"), vec!["PEPE"]);
    assert_eq!(assets("Only_Upbit"), vec!["SAND", "SNT", "XRP"]);
    assert_eq!(assets("Only_Bithumb"), vec!["KLAY"]);
    assert_eq!(assets("Binance_Upbit"), vec!["TRX"]);
    assert_eq!(assets("Binance_Bithumb"), vec!["SOL"]);
    assert_eq!(assets("Bithumb_Upbit"), vec!["ETH"]);

    // Binance ∩ Bithumb − UpbitKRW = {ARB, SOL}; Upbit USDT ∩ BTC − KRW = {ARB, TRX}
    assert_eq!(assets("Common_Pairs"), vec!["ARB"]);
    assert_eq!(assets("Only_Binance_Bithumb"), vec!["SOL"]);
    assert_eq!(assets("Only_Upbit_USDT_BTC"), vec!["TRX"]);
    assert_eq!(report.table("Common_Pairs").unwrap().columns, vec!["Common Pairs"]);
}

#[tokio::test]
async fn analysis_orders_upbit_pairs_by_binance_dates() {
    let report = build_report(ReportKind::Analysis, &sources()).await.unwrap();

    let krw = report.table("Upbit_KRW_pairs").unwrap();
    // BTC is the only KRW asset Binance dated; the rest sort by code.
    assert_eq!(column(krw, 0), vec!["KRW-BTC", "KRW-ETH", "KRW-SAND", "KRW-XRP"]);
    assert_eq!(krw.rows[0][6], "2017-08-17");
    assert_eq!(krw.rows[1][6], "unknown");

    let usdt = report.table("Upbit_USDT_pairs").unwrap();
    assert_eq!(column(usdt, 0), vec!["USDT-BTC", "USDT-ARB", "USDT-ETH", "USDT-TRX"]);

    assert_eq!(column(report.table("Upbit_all_markets").unwrap(), 0), vec!["KRW-ETH"]);
    assert_eq!(
        column(report.table("Upbit_USDT_BTC_not_KRW").unwrap(), 0),
        vec!["USDT-ARB", "USDT-TRX"]
    );
    assert_eq!(column(report.table("Upbit_only_BTC").unwrap(), 0), vec!["BTC-SNT"]);

    let binance = report.table("Binance_USDT_pairs").unwrap();
    assert_eq!(binance.columns.len(), 10);
    assert_eq!(
        column(binance, 0),
        vec!["BTCUSDT", "SOLUSDT", "ARBUSDT", "PEPEUSDT", "TRXUSDT"]
    );
}

#[tokio::test]
async fn compare_report_uses_upbit_krw_only() {
    let report = build_report(ReportKind::Compare, &sources()).await.unwrap();
    assert_eq!(
        report.sheet_names(),
        vec!["ALL", "only_ba", "only_upbit", "only_bithumb", "ba_upbit", "ba_bithumb", "upbit_bithumb"]
    );

    // Upbit KRW {BTC, ETH, XRP, SAND}
    let assets = |name: &str| column(report.table(name).unwrap(), 0);
    assert_eq!(assets("ALL"), vec!["BTC"]);
    assert_eq!(assets("only_ba"), vec!["PEPE", "TRX"]);
    assert_eq!(assets("only_upbit"), vec!["SAND", "XRP"]);
    assert_eq!(assets("ba_bithumb"), vec!["ARB", "SOL"]);
    assert_eq!(assets("upbit_bithumb"), vec!["ETH"]);
    assert!(report.table("ba_upbit").unwrap().is_empty());
}

#[tokio::test]
async fn upbit_report_sorts_by_code() {
    let report = build_report(ReportKind::Upbit, &sources()).await.unwrap();
    assert_eq!(report.tables.len(), 8);

    let usdt = report.table("USDT_pairs").unwrap();
    assert_eq!(column(usdt, 0), vec!["USDT-ARB", "USDT-BTC", "USDT-ETH", "USDT-TRX"]);
    assert_eq!(column(report.table("only_KRW_pairs").unwrap(), 0), vec!["KRW-SAND"]);
    assert!(report.table("only_USDT_pairs").unwrap().is_empty());
}

#[tokio::test]
async fn bithumb_report_lists_pair_codes() {
    let report = build_report(ReportKind::Bithumb, &sources()).await.unwrap();
    let codes = |name: &str| column(report.table(name).unwrap(), 0);

    assert_eq!(codes("KRW_pairs").len(), 5);
    assert_eq!(codes("only_KRW"), vec!["KRW-ARB", "KRW-BTC", "KRW-SOL"]);
    assert_eq!(codes("only_BTC"), vec!["BTC-WEMIX"]);
    assert_eq!(codes("both_markets"), vec!["KRW-ETH, BTC-ETH", "KRW-KLAY, BTC-KLAY"]);
    assert_eq!(report.table("both_markets").unwrap().columns, vec!["both_markets"]);
}

#[tokio::test]
async fn korea_diff_compares_base_assets() {
    let report = build_report(ReportKind::KoreaDiff, &sources()).await.unwrap();
    let assets = |name: &str| column(report.table(name).unwrap(), 0);

    // Upbit only-KRW {SAND}, only-BTC {SNT}
    // Bithumb only-KRW {ARB, BTC, SOL}, only-BTC {WEMIX}
    assert_eq!(assets("upbit_krw_only"), vec!["SAND"]);
    assert_eq!(assets("bithumb_krw_only"), vec!["ARB", "BTC", "SOL"]);
    assert_eq!(assets("upbit_btc_only"), vec!["SNT"]);
    assert_eq!(assets("bithumb_btc_only"), vec!["WEMIX"]);
}

#[tokio::test]
async fn failed_exchange_degrades_to_empty() {
    let sources = ListingSources {
        binance: Arc::new(
            MockListingSource::new(Exchange::Binance)
                .with_failure("USDT", ListingError::unavailable("Binance", "timed out")),
        ),
        upbit: Arc::new(upbit_mock()),
        bithumb: Arc::new(
            MockListingSource::new(Exchange::Bithumb)
                .with_failure("KRW", ListingError::format("Bithumb", "missing field `data`")),
        ),
    };

    let report = build_report(ReportKind::Analysis, &sources).await.unwrap();
    assert_eq!(report.tables.len(), 20);
    assert!(report.table("Binance_USDT_pairs").unwrap().is_empty());
    assert!(report.table("All_Exchanges").unwrap().is_empty());
    assert_eq!(report.table("Only_Upbit").unwrap().len(), 7);
    // no Binance dates: plain code order
    assert_eq!(
        column(report.table("Upbit_KRW_pairs").unwrap(), 0),
        vec!["KRW-BTC", "KRW-ETH", "KRW-SAND", "KRW-XRP"]
    );
}

#[tokio::test]
async fn every_report_is_written_to_csv() {
    let dir = scratch_dir("csv_all");
    let output = OutputEnvConfig {
        dir: dir.clone(),
        format: OutputFormat::Csv,
    };

    let path = run_report(ReportKind::Compare, &sources(), &output).await.unwrap();
    assert!(path.starts_with(&dir));
    assert!(
        path.file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("Exchange_Listings_Results_")
    );
    assert_eq!(fs::read_to_string(path.join("ALL.csv")).unwrap(), "Asset\nBTC\n");
    assert_eq!(fs::read_dir(&path).unwrap().count(), 7);

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn write_report_keeps_empty_sheets() {
    let dir = scratch_dir("empty");
    let report = build_report(ReportKind::Bithumb, &sources()).await.unwrap();

    let sink = Box::new(CsvSink::create(&dir, report.prefix()).unwrap());
    let path = write_report(&report, sink).unwrap();

    for name in report.sheet_names() {
        assert!(path.join(format!("{}.csv", name)).exists(), "{} missing", name);
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn xlsx_output_is_one_workbook() {
    let dir = scratch_dir("xlsx");
    let output = OutputEnvConfig {
        dir: dir.clone(),
        format: OutputFormat::Xlsx,
    };

    let path = run_report(ReportKind::Listings, &sources(), &output).await.unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
    assert!(path.is_file());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn hyphenated_symbol_reconciles_across_korean_exchanges() {
    let upbit_markets = parse_market_list(json!([
        {"market": "KRW-SOME-COIN", "korean_name": "썸코인", "english_name": "Some Coin"},
        {"market": "KRW-BTC"}
    ]))
    .unwrap();
    let upbit_krw = pairs_for_quote(&upbit_markets, "KRW");
    let bithumb_krw = parse_ticker_all(
        json!({"status": "0000", "data": {"SOME-COIN": {}, "BTC": {}, "date": "1"}}),
        "KRW",
    )
    .unwrap();

    let cmp = CrossComparison::compare(
        &AssetSet::from_pairs("Upbit", &upbit_krw),
        &AssetSet::from_pairs("Bithumb", &bithumb_krw),
    );
    assert_eq!(cmp.common_to_both.iter().collect::<Vec<_>>(), vec!["BTC", "SOME"]);
    assert!(cmp.only_in_a.is_empty());
    assert!(cmp.only_in_b.is_empty());
}

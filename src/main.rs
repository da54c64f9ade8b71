//! listing_recon - exchange listing reconciliation
//!
//! Fetches the public market lists of Binance, Upbit and Bithumb, compares
//! them by base asset and writes the results as a workbook (or CSV files).
//!
//! # Usage
//! ```sh
//! cargo run                      # full analysis
//! cargo run -- compare           # seven-way overlap only
//! OUTPUT_FORMAT=csv cargo run -- korea-diff
//! ```
//!
//! # Environment Variables
//! - `UPBIT_BASE_URL`, `BINANCE_BASE_URL`, `BITHUMB_BASE_URL` - API roots
//! - `HTTP_TIMEOUT_SECS` - Per-request timeout (default: 10)
//! - `HTTP_USER_AGENT` - User-Agent header (default: Mozilla/5.0)
//! - `OUTPUT_DIR` - Output directory (default: output)
//! - `OUTPUT_FORMAT` - `xlsx` or `csv` (default: xlsx)

use anyhow::Result;
use clap::Parser;
use listing_recon::application::reporting::SummaryReporter;
use listing_recon::application::{ReportKind, run_report};
use listing_recon::config::Config;
use listing_recon::infrastructure::SourceFactory;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    report: Option<ReportKind>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();
    let kind = cli.report.unwrap_or_default();

    let config = Config::from_env()?;
    info!(
        "listing_recon {} starting: report={}, output={:?} ({:?})",
        env!("CARGO_PKG_VERSION"),
        kind,
        config.output.dir,
        config.output.format
    );

    SummaryReporter::print_header(kind.name(), kind.prefix());

    let sources = SourceFactory::create_sources(&config)?;
    run_report(kind, &sources, &config.output).await?;

    info!("Done.");
    Ok(())
}

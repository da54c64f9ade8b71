use crate::application::reporting::SummaryReporter;
use crate::application::reports::{Report, ReportKind, build_report};
use crate::config::OutputEnvConfig;
use crate::domain::errors::SinkError;
use crate::domain::ports::TableSink;
use crate::infrastructure::{ListingSources, create_sink};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Builds one report, writes it and prints the summary.
pub async fn run_report(
    kind: ReportKind,
    sources: &ListingSources,
    output: &OutputEnvConfig,
) -> Result<PathBuf> {
    info!("Building {} report", kind);
    let report = build_report(kind, sources)
        .await
        .with_context(|| format!("Failed to build {} report", kind))?;

    let sink = create_sink(output, report.prefix())
        .with_context(|| format!("Failed to open output in {:?}", output.dir))?;
    let path = write_report(&report, sink).context("Failed to write report")?;

    SummaryReporter::print_summary(&report, &path);
    Ok(path)
}

/// Writes every table in sheet order and finalizes the sink.
pub fn write_report(report: &Report, mut sink: Box<dyn TableSink>) -> Result<PathBuf, SinkError> {
    for table in &report.tables {
        sink.write_table(table)?;
    }
    sink.finish()
}

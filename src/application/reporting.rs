//! Console summary printed after a report has been written.

use crate::application::reports::Report;
use std::path::Path;

pub struct SummaryReporter;

impl SummaryReporter {
    pub fn print_header(report_name: &str, prefix: &str) {
        println!("{}", "=".repeat(60));
        println!("📊 EXCHANGE LISTING RECONCILIATION");
        println!("{}", "=".repeat(60));
        println!("Report:       {}", report_name);
        println!("Output:       {}_<timestamp>", prefix);
        println!("{}", "=".repeat(60));
    }

    pub fn print_summary(report: &Report, output: &Path) {
        println!("{}", Self::summary_lines(report).join("\n"));
        println!("💾 Results saved to: {}", output.display());
    }

    /// One line per sheet with its row count, framed by rules.
    pub fn summary_lines(report: &Report) -> Vec<String> {
        let width = report
            .tables
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Sheet".len());

        let mut lines = Vec::with_capacity(report.tables.len() + 5);
        lines.push(String::new());
        lines.push(format!("{:<width$} | {:>6}", "Sheet", "Rows", width = width));
        lines.push("-".repeat(width + 9));
        for table in &report.tables {
            lines.push(format!(
                "{:<width$} | {:>6}",
                table.name,
                table.len(),
                width = width
            ));
        }
        lines.push("-".repeat(width + 9));
        lines
    }
}

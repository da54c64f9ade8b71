pub mod fetch;
pub mod reporting;
pub mod reports;
pub mod runner;

pub use reports::{Report, ReportKind, build_report};
pub use runner::{run_report, write_report};

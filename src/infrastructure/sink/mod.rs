pub mod csv_dir;
pub mod naming;
pub mod xlsx;

pub use csv_dir::CsvSink;
pub use xlsx::XlsxSink;

use crate::config::{OutputEnvConfig, OutputFormat};
use crate::domain::errors::SinkError;
use crate::domain::ports::TableSink;

/// Opens the sink selected by `OUTPUT_FORMAT` for a report named `prefix`.
pub fn create_sink(config: &OutputEnvConfig, prefix: &str) -> Result<Box<dyn TableSink>, SinkError> {
    match config.format {
        OutputFormat::Xlsx => Ok(Box::new(XlsxSink::create(&config.dir, prefix)?)),
        OutputFormat::Csv => Ok(Box::new(CsvSink::create(&config.dir, prefix)?)),
    }
}

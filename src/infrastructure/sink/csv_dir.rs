//! Directory sink: one `<sheet>.csv` per table inside a timestamped folder.

use super::naming::{ensure_dir, timestamped_path};
use crate::domain::errors::SinkError;
use crate::domain::ports::TableSink;
use crate::domain::report::Table;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct CsvSink {
    dir: PathBuf,
    written: usize,
}

impl CsvSink {
    pub fn create(root: &Path, prefix: &str) -> Result<Self, SinkError> {
        let dir = timestamped_path(root, prefix, None)?;
        ensure_dir(&dir)?;
        Ok(Self { dir, written: 0 })
    }

    fn table_path(&self, table: &Table) -> PathBuf {
        self.dir.join(format!("{}.csv", table.name))
    }
}

impl TableSink for CsvSink {
    fn write_table(&mut self, table: &Table) -> Result<(), SinkError> {
        let path = self.table_path(table);
        let write_err = |e: csv::Error| SinkError::Write {
            path: path.clone(),
            reason: e.to_string(),
        };

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(write_err)?;

        wtr.write_record(&table.columns).map_err(write_err)?;
        for row in &table.rows {
            wtr.write_record(row).map_err(write_err)?;
        }
        wtr.flush().map_err(|e| SinkError::Write {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        self.written += 1;
        debug!("CsvSink: Wrote {:?} ({} rows)", path, table.len());
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<PathBuf, SinkError> {
        info!("CsvSink: Wrote {} tables to {:?}", self.written, self.dir);
        Ok(self.dir)
    }
}

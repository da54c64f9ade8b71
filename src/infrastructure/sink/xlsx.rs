//! Single-workbook sink: one worksheet per table.

use super::naming::timestamped_path;
use crate::domain::errors::SinkError;
use crate::domain::ports::TableSink;
use crate::domain::report::Table;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const HEADER_FILL: u32 = 0xD7E4BC;

pub struct XlsxSink {
    workbook: Workbook,
    header_format: Format,
    path: PathBuf,
}

impl XlsxSink {
    pub fn create(dir: &Path, prefix: &str) -> Result<Self, SinkError> {
        let path = timestamped_path(dir, prefix, Some("xlsx"))?;
        Ok(Self::at_path(path))
    }

    pub fn at_path(path: PathBuf) -> Self {
        let header_format = Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Top)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_border(FormatBorder::Thin);

        Self {
            workbook: Workbook::new(),
            header_format,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for XlsxSink {
    fn write_table(&mut self, table: &Table) -> Result<(), SinkError> {
        let encode = |e: XlsxError| SinkError::Encode {
            table: table.name.clone(),
            reason: e.to_string(),
        };

        // Built detached so a rejected table leaves the workbook untouched.
        let header_format = &self.header_format;
        let mut sheet = Worksheet::new();
        sheet.set_name(&table.name).map_err(encode)?;

        for (col, header) in table.columns.iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, header, header_format)
                .map_err(encode)?;
        }
        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                sheet
                    .write_string(row_idx as u32 + 1, col as u16, cell)
                    .map_err(encode)?;
            }
        }
        for (col, width) in table.column_widths().into_iter().enumerate() {
            sheet
                .set_column_width(col as u16, width as f64)
                .map_err(encode)?;
        }
        sheet.set_freeze_panes(1, 0).map_err(encode)?;
        self.workbook.push_worksheet(sheet);

        debug!("XlsxSink: Wrote sheet {} ({} rows)", table.name, table.len());
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<PathBuf, SinkError> {
        self.workbook
            .save(&self.path)
            .map_err(|e| SinkError::Write {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        info!("XlsxSink: Saved {:?}", self.path);
        Ok(self.path)
    }
}

//! Output naming: `<prefix>_<YYYYMMDD_HHMMSS>` under the configured directory.

use crate::domain::errors::SinkError;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn output_stem<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}", prefix, at.format(TIMESTAMP_FORMAT))
}

/// Timestamped path for a new output, creating `dir` if needed.
pub fn timestamped_path(dir: &Path, prefix: &str, extension: Option<&str>) -> Result<PathBuf, SinkError> {
    ensure_dir(dir)?;
    let stem = output_stem(prefix, &Local::now());
    let path = match extension {
        Some(ext) => dir.join(format!("{}.{}", stem, ext)),
        None => dir.join(stem),
    };
    Ok(path)
}

pub fn ensure_dir(dir: &Path) -> Result<(), SinkError> {
    fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

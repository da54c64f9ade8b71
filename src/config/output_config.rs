//! Output configuration parsing from environment variables.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// File format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One workbook, one sheet per table
    #[default]
    Xlsx,
    /// One directory, one CSV file per table
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!("Invalid OUTPUT_FORMAT: {}. Must be 'xlsx' or 'csv'", s),
        }
    }
}

/// Output environment configuration
#[derive(Debug, Clone)]
pub struct OutputEnvConfig {
    pub dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for OutputEnvConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            format: OutputFormat::Xlsx,
        }
    }
}

impl OutputEnvConfig {
    pub fn from_env() -> Result<Self> {
        let format = match env::var("OUTPUT_FORMAT") {
            Ok(raw) => OutputFormat::from_str(&raw)?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self {
            dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
            format,
        })
    }
}

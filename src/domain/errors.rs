use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching a listing from an exchange.
///
/// Both variants are recoverable: the caller logs them and carries on with
/// an empty listing for that exchange.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("{exchange} unavailable: {reason}")]
    UpstreamUnavailable { exchange: String, reason: String },

    #[error("{exchange} returned an unexpected payload: {reason}")]
    UpstreamFormat { exchange: String, reason: String },
}

impl ListingError {
    pub fn unavailable(exchange: impl ToString, reason: impl ToString) -> Self {
        ListingError::UpstreamUnavailable {
            exchange: exchange.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn format(exchange: impl ToString, reason: impl ToString) -> Self {
        ListingError::UpstreamFormat {
            exchange: exchange.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Misuse of the reconciler: wrong operand count or unknown operand names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("At least {required} asset sets are required, got {actual}")]
    TooFewSets { required: usize, actual: usize },

    #[error("At most {max} asset sets are supported, got {actual}")]
    TooManySets { max: usize, actual: usize },

    #[error("Asset set label '{label}' is used more than once")]
    DuplicateLabel { label: String },

    #[error("No asset set labelled '{label}'")]
    UnknownSet { label: String },

    #[error("An exclusive pair needs two different sets, got '{label}' twice")]
    SameSet { label: String },
}

/// Output failures. These abort the run.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Invalid table '{table}': {reason}")]
    Encode { table: String, reason: String },
}

//! Common types and constants for Binance infrastructure

use serde_json::Value;

pub const BINANCE: &str = "Binance";

const NOT_AVAILABLE: &str = "N/A";

/// Reads `field` from the first filter of type `filter_type`, `"N/A"` when
/// the filter or field is missing.
pub fn find_filter_value(filters: &[Value], filter_type: &str, field: &str) -> String {
    filters
        .iter()
        .find(|f| f.get("filterType").and_then(Value::as_str) == Some(filter_type))
        .and_then(|f| f.get(field))
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

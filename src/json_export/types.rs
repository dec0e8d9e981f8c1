use indexmap::IndexMap;
use serde_json::Value;

/// One object per row, keys kept in column order.
pub type OrderedSheetData = Vec<IndexMap<String, Value>>;

use indexmap::IndexMap;
use serde::Serialize;

use crate::excel::Sheet;
use crate::json_export::converters::process_cell_value;
use crate::json_export::types::OrderedSheetData;

pub fn serialize_to_json<T: Serialize>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// The first `rows` data rows of `sheet` as JSON objects keyed by the
/// deduplicated column names.
pub fn preview_rows_json(sheet: &Sheet, rows: usize) -> OrderedSheetData {
    let headers = sheet.column_names();
    let head = sheet.head(rows);
    let mut sheet_data = Vec::with_capacity(head.len());

    for row in head {
        let mut row_data = IndexMap::with_capacity(headers.len());
        for (header, cell) in headers.iter().zip(row) {
            row_data.insert(header.clone(), process_cell_value(cell));
        }
        sheet_data.push(row_data);
    }

    sheet_data
}

mod converters;
mod exporters;
mod types;

pub use converters::process_cell_value;
pub use exporters::{preview_rows_json, serialize_to_json};
pub use types::OrderedSheetData;

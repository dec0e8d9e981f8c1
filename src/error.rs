//! Error types for the previewer.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PreviewError>;

/// Every way a preview run can fail. All variants end up at the single
/// reporting site in [`crate::preview::preview()`].
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The workbook file is missing, unreadable or not a spreadsheet
    #[error("Failed to open workbook '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook reports no sheets, so there is no first sheet to load
    #[error("list index out of range: workbook has no sheets")]
    NoSheets,

    /// The workbook opened but the sheet data could not be read
    #[error("Failed to load sheet '{sheet}': {source}")]
    Load {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to write preview: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize preview to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

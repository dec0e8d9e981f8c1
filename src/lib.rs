//! Preview the first sheet of a spreadsheet workbook in the terminal.

pub mod error;
pub mod excel;
pub mod json_export;
pub mod preview;
pub mod utils;

pub use error::{PreviewError, Result};
pub use preview::{OutputMode, PreviewOptions, preview};

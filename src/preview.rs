//! The previewer: open a workbook, list its sheets and print the first rows
//! of the first sheet.

mod inspect;
mod table;

use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::excel::{Sheet, open_workbook};
use crate::json_export::{preview_rows_json, serialize_to_json};

pub use inspect::render_cell_report;
pub use table::render_table;

/// Workbook opened when no path is given.
pub const DEFAULT_WORKBOOK: &str = "מערכות מורים תשפו.xlsx";

pub const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Number of data rows shown from the first sheet
    pub rows: usize,
    pub mode: OutputMode,
    /// Append a per-cell report after the preview
    pub inspect_cells: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_PREVIEW_ROWS,
            mode: OutputMode::Table,
            inspect_cells: false,
        }
    }
}

/// Print the preview of `path` to `out`. Any failure ends the preview with a
/// single `Error: ` line; whatever was written before it stays written.
pub fn preview<P: AsRef<Path>, W: Write>(path: P, options: &PreviewOptions, out: &mut W) {
    if let Err(err) = run(path.as_ref(), options, out) {
        warn!(error = %err, "preview aborted");
        // Nothing left to report to if the output itself is gone
        let _ = writeln!(out, "Error: {err}");
    }
}

/// The preview steps without the catch-all: open, list, select, load, print.
pub fn run<W: Write>(path: &Path, options: &PreviewOptions, out: &mut W) -> Result<()> {
    let mut workbook = open_workbook(path)?;

    writeln!(out, "Sheets: {}", workbook.sheet_names().join(", "))?;

    // Only the first sheet is previewed
    let sheet_name = workbook.first_sheet_name()?.to_string();

    // The banner goes out before the load, so a broken sheet still shows it
    writeln!(out)?;
    writeln!(out, "--- Sheet: {sheet_name} ---")?;
    let sheet = workbook.load_sheet(&sheet_name)?;
    write_sheet(&sheet, options, out)?;

    if options.inspect_cells {
        write!(out, "{}", render_cell_report(&sheet, options.rows))?;
    }

    debug!(path = %workbook.path().display(), sheet = %sheet.name, "preview done");
    Ok(())
}

fn write_sheet<W: Write>(sheet: &Sheet, options: &PreviewOptions, out: &mut W) -> Result<()> {
    match options.mode {
        OutputMode::Table => writeln!(out, "{}", render_table(sheet, options.rows))?,
        OutputMode::Json => {
            let rows = preview_rows_json(sheet, options.rows);
            writeln!(out, "{}", serialize_to_json(&rows)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PreviewOptions::default();
        assert_eq!(options.rows, 10);
        assert_eq!(options.mode, OutputMode::Table);
        assert!(!options.inspect_cells);
    }

    #[test]
    fn test_missing_file_reports_single_error_line() {
        let mut out = Vec::new();
        preview(
            "does/not/exist.xlsx",
            &PreviewOptions::default(),
            &mut out,
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error: Failed to open workbook"));
        assert_eq!(text.lines().count(), 1);
        assert!(!text.contains("Sheets:"));
    }

    #[test]
    fn test_run_surfaces_open_error() {
        let mut out = Vec::new();
        let err = run(
            Path::new("does/not/exist.xlsx"),
            &PreviewOptions::default(),
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, crate::error::PreviewError::Open { .. }));
        assert!(out.is_empty());
    }
}

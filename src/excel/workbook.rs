use calamine::{Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PreviewError, Result};
use crate::excel::Sheet;

/// An opened workbook. Sheet names are read once at open time; sheet data
/// is only read when asked for.
pub struct Workbook {
    path: PathBuf,
    sheet_names: Vec<String>,
    inner: Sheets<BufReader<File>>,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();

    let inner = open_workbook_auto(path).map_err(|source| PreviewError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = inner.sheet_names();
    debug!(path = %path.display(), sheets = sheet_names.len(), "opened workbook");

    Ok(Workbook {
        path: path.to_path_buf(),
        sheet_names,
        inner,
    })
}

impl Workbook {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in the order the file stores them.
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn first_sheet_name(&self) -> Result<&str> {
        self.sheet_names
            .first()
            .map(String::as_str)
            .ok_or(PreviewError::NoSheets)
    }

    /// Read the whole used range of `name` and turn it into a table.
    pub fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|source| PreviewError::Load {
                sheet: name.to_string(),
                source,
            })?;

        let sheet = Sheet::from_range(name, &range);
        debug!(
            sheet = name,
            rows = sheet.rows.len(),
            cols = sheet.width(),
            "loaded sheet"
        );

        Ok(sheet)
    }
}

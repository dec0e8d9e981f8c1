use std::collections::HashMap;

use calamine::{Data, Range};

use crate::excel::CellValue;

/// One sheet loaded as a table: the first non-blank row is the header,
/// everything below it is data.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    /// Sheet coordinates (row, col) of the top-left header cell. Leading
    /// blank rows are skipped, leading blank columns are kept.
    pub start: (u32, u32),
    pub headers: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        // Columns left of the used range still count, so tables begin at column A
        let lead = start_col as usize;
        let width = lead + range.width();

        let mut rows = range.rows().map(|row| {
            let mut cells = vec![CellValue::Empty; lead];
            cells.extend(row.iter().map(CellValue::from));
            cells
        });

        let headers = rows.next().unwrap_or_default();
        let mut data: Vec<Vec<CellValue>> = rows.collect();

        // Ranges are rectangular, but keep the invariant explicit
        for row in &mut data {
            row.resize(width, CellValue::Empty);
        }

        Sheet {
            name: name.to_string(),
            start: (start_row, 0),
            headers,
            rows: data,
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// The first `n` data rows by position.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Columns whose values read as floats: purely numeric columns that hold
    /// a non-whole number or have gaps.
    pub fn float_columns(&self) -> Vec<bool> {
        (0..self.width())
            .map(|col_idx| {
                let mut numeric = false;
                let mut floaty = false;
                for cell in self.rows.iter().filter_map(|row| row.get(col_idx)) {
                    match cell {
                        CellValue::Int(_) => numeric = true,
                        CellValue::Float(_) => {
                            numeric = true;
                            floaty = true;
                        }
                        CellValue::Empty => floaty = true,
                        _ => return false,
                    }
                }
                numeric && floaty
            })
            .collect()
    }

    /// Column names with blanks replaced by `Unnamed: <col>` and repeats
    /// suffixed `.1`, `.2`, ... in order of appearance.
    pub fn column_names(&self) -> Vec<String> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut names = Vec::with_capacity(self.headers.len());

        for (col_idx, cell) in self.headers.iter().enumerate() {
            let base = cell
                .header_label()
                .unwrap_or_else(|| format!("Unnamed: {col_idx}"));

            let mut name = base.clone();
            while seen.contains_key(&name) {
                let count = seen.entry(base.clone()).or_insert(0);
                *count += 1;
                name = format!("{base}.{count}");
            }
            seen.insert(name.clone(), 0);
            names.push(name);
        }

        names
    }
}

//! Spreadsheet loading.
//!
//! The first row of the first worksheet is the header row; every following
//! non-blank row becomes a [`SheetRow`] keyed by header text. When a header
//! repeats, the first column with that text wins.

use crate::libimport::error::Error;
use calamine::{open_workbook_auto, Data, Reader};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// One spreadsheet row, header text to rendered cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: HashMap<String, String>,
}

impl SheetRow {
    /// Value of `column`, empty if the cell was blank or the column unknown.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SheetRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cells = HashMap::new();
        for (k, v) in iter {
            cells.entry(k.into()).or_insert_with(|| v.into());
        }
        SheetRow { cells }
    }
}

pub fn load_sheet(path: &Path, required_columns: &[&str]) -> Result<Vec<SheetRow>, Error> {
    if !path.exists() {
        return Err(Error::SheetNotFound(path.to_path_buf()));
    }
    let now = Instant::now();
    info!("[Sheet] Loading {:?}", path);

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(Error::NoWorksheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(render_cell).collect())
        .unwrap_or_default();

    if let Some(missing) = required_columns
        .iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(Error::MissingColumn(missing.to_string()));
    }

    let loaded: Vec<SheetRow> = rows
        .filter(|row| !row.iter().all(|c| matches!(c, Data::Empty)))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| !header.is_empty())
                .map(|(col, header)| {
                    let value = row.get(col).map(render_cell).unwrap_or_default();
                    (header.clone(), value)
                })
                .collect::<SheetRow>()
        })
        .collect();

    debug!(
        "[Sheet] Read {} rows from '{}' in {} ms.",
        loaded.len(),
        sheet_name,
        now.elapsed().as_millis()
    );
    Ok(loaded)
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // beyond 2^53 not every integer is representable
            if f.fract() == 0.0 && f.abs() < 2f64.powi(53) {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

//! Workbook ingestion: locate the article columns and read rows as text.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use thiserror::Error;
use tracing::info;

/// Header of the column holding article titles.
pub const TITLE_HEADER: &str = "Article Title";
/// Header of the column holding abstracts.
pub const ABSTRACT_HEADER: &str = "Abstract";
/// Workbook extensions picked up from the input folder (compared ignoring case).
pub const EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// One article read from a workbook row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub title: String,
    pub abstract_text: String,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {0} has no readable worksheet")]
    NoWorksheet(PathBuf),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// True when `path` carries one of [`EXTENSIONS`].
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Read every data row of the first worksheet, in sheet order.
pub fn load_rows(path: &Path) -> Result<Vec<InputRow>, InputError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::NoWorksheet(path.to_path_buf()))?
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let rows = rows_from_range(&range)?;
    info!(path = %path.display(), rows = rows.len(), "loaded workbook");
    Ok(rows)
}

/// Treat the first row as a header and pull title/abstract from the rest.
///
/// Columns are only resolved when there is at least one data row, so an
/// empty or header-only sheet yields no rows instead of an error.
pub fn rows_from_range(range: &Range<Data>) -> Result<Vec<InputRow>, InputError> {
    let mut rows = range.rows().peekable();
    let header = rows.next().unwrap_or(&[]);
    if rows.peek().is_none() {
        return Ok(Vec::new());
    }
    let title_idx = column_index(header, TITLE_HEADER)?;
    let abstract_idx = column_index(header, ABSTRACT_HEADER)?;

    Ok(rows
        .map(|row| InputRow {
            title: cell_text(row.get(title_idx)),
            abstract_text: cell_text(row.get(abstract_idx)),
        })
        .collect())
}

fn column_index(header: &[Data], name: &'static str) -> Result<usize, InputError> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .ok_or(InputError::MissingColumn(name))
}

/// Coerce any cell to text; blanks become the empty string.
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

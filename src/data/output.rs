//! CSV output tables, one per input workbook.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::info;

use crate::extract::{schema, ExtractionRecord};

/// UTF-8 byte-order mark so spreadsheet tools detect the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Source article plus its extraction, as written to the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub title: String,
    pub abstract_text: String,
    pub record: ExtractionRecord,
}

impl OutputRow {
    fn cells(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.abstract_text.as_str()]
            .into_iter()
            .chain(self.record.values())
    }
}

/// Write `rows` as a BOM-prefixed CSV with the fixed column order.
pub fn write_table(path: &Path, rows: &[OutputRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent:?}"))?;
    }
    let file = File::create(path).with_context(|| format!("create {path:?}"))?;
    let mut sink = BufWriter::new(file);
    sink.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(schema::output_columns())?;
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;
    info!(rows = rows.len(), path = %path.display(), "wrote output table");
    Ok(())
}

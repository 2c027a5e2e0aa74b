//! Batch driver: workbook discovery, per-row extraction and table output.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use tokio::time::sleep;
use tracing::{info, instrument, warn};
use walkdir::WalkDir;

use crate::{
    config::Settings,
    data::{
        output::{self, OutputRow},
        spreadsheet::{self, InputRow},
    },
    extract::parse_response,
    llm::Completion,
};

/// Fixed delay applied after every completion call.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            sleep(self.interval).await;
        }
    }
}

/// Totals reported once the whole batch has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files: usize,
    pub rows: usize,
    /// Rows whose completion call failed and were written as all-NULL.
    pub failed_rows: usize,
}

/// Workbooks directly inside `dir`, sorted by file name.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.with_context(|| format!("list {dir:?}"))?;
        if entry.file_type().is_file() && spreadsheet::is_workbook(entry.path()) {
            inputs.push(entry.into_path());
        }
    }
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(inputs)
}

/// Extract every row in order. A failed call yields an all-NULL record for
/// that row only.
pub async fn process_rows<C>(
    client: &C,
    rows: Vec<InputRow>,
    pacer: Pacer,
) -> (Vec<OutputRow>, usize)
where
    C: Completion + ?Sized,
{
    let mut results = Vec::with_capacity(rows.len());
    let mut failed = 0usize;
    for (idx, row) in rows.into_iter().enumerate() {
        let raw = client.extract(&row.title, &row.abstract_text).await;
        pacer.pause().await;

        if raw.is_none() {
            failed += 1;
            warn!(row = idx, title = %row.title, "extraction failed; writing NULL row");
        }
        let record = parse_response(raw.as_deref());
        results.push(OutputRow {
            title: row.title,
            abstract_text: row.abstract_text,
            record,
        });
    }
    (results, failed)
}

/// Process one workbook end to end and return `(rows, failed_rows)`.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn process_file<C>(
    path: &Path,
    settings: &Settings,
    client: &C,
) -> Result<(usize, usize)>
where
    C: Completion + ?Sized,
{
    info!(path = %path.display(), "processing");
    let rows = spreadsheet::load_rows(path).with_context(|| format!("read {path:?}"))?;
    let pacer = Pacer::new(settings.request_interval);
    let (results, failed) = process_rows(client, rows, pacer).await;

    let out_path = settings.output_path_for(path);
    output::write_table(&out_path, &results)?;
    info!(path = %out_path.display(), "saved");
    Ok((results.len(), failed))
}

/// Run every workbook in the configured input folder.
#[instrument(skip_all)]
pub async fn run_batch<C>(settings: &Settings, client: &C) -> Result<BatchSummary>
where
    C: Completion + ?Sized,
{
    let inputs = discover_inputs(&settings.input_dir)?;
    if inputs.is_empty() {
        warn!(dir = %settings.input_dir.display(), "no workbooks found");
    }

    let mut summary = BatchSummary::default();
    for path in &inputs {
        let (rows, failed) = process_file(path, settings, client).await?;
        summary.files += 1;
        summary.rows += rows;
        summary.failed_rows += failed;
    }

    info!(
        files = summary.files,
        rows = summary.rows,
        failed_rows = summary.failed_rows,
        "all files processed"
    );
    Ok(summary)
}

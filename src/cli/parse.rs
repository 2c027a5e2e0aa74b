//! CLI entry-point for parsing a saved model response offline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use crate::extract::parse_response;

/// Args for the `parse` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// File holding the raw completion text.
    pub file: PathBuf,
    /// Emit the record as a JSON object instead of `Field: value` lines.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("read {:?}", args.file))?;
    let record = parse_response(Some(&raw));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        for (field, value) in record.iter() {
            println!("{field}: {value}");
        }
    }
    Ok(())
}

//! Command-line interface wiring for oer-extract.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod parse;
pub mod prompt;
pub mod run;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "OER electrocatalyst extraction from article spreadsheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Run(args) => run::run(args, settings).await,
            Commands::Prompt(args) => prompt::run(args),
            Commands::Parse(args) => parse::run(args),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract every workbook in the input folder into CSV tables.
    Run(run::Args),
    /// Print the rendered prompt for one article without calling the model.
    Prompt(prompt::Args),
    /// Parse a saved model response and print the extracted fields.
    Parse(parse::Args),
}

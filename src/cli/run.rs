//! CLI entry-point for the batch extraction run.

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument, warn};

use crate::{
    config::Settings,
    llm::{ChatClient, LlmConfig},
    pipeline,
};

/// Args for the `run` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Override the folder scanned for workbooks.
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    /// Override the folder receiving CSV tables.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Override the model identifier.
    #[arg(long)]
    pub model: Option<String>,
    /// Override the pause after each request, in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl Args {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(dir) = self.input_dir {
            settings.input_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            settings.output_dir = dir;
        }
        if let Some(model) = self.model {
            settings.model = model;
        }
        if let Some(ms) = self.interval_ms {
            settings.request_interval = Duration::from_millis(ms);
        }
        settings
    }
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let settings = args.apply(settings);
    if settings.llm_api_key.is_empty() {
        warn!("no LLM_API_KEY or OPENAI_API_KEY set; requests will fail authentication");
    }
    let client = ChatClient::new(LlmConfig::from_settings(&settings))?;
    info!(
        model = client.model(),
        input = %settings.input_dir.display(),
        output = %settings.output_dir.display(),
        "starting extraction run"
    );
    pipeline::run_batch(&settings, &client).await?;
    Ok(())
}

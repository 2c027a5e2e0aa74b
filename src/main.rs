//! Entry point wiring CLI dispatch to the extraction pipeline.

use anyhow::Result;
use oer_extract::{cli::Cli, config::Settings, logging};
use tracing::{debug, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing()?;
    let settings = Settings::load()?;

    debug!(?cli, "starting command");
    cli.dispatch(settings).await
}

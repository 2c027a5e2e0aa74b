//! CLI entry-point for rendering a prompt without calling the model.

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::extract::prompt;

/// Args for the `prompt` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Article title.
    #[arg(long)]
    pub title: String,
    /// Article abstract.
    #[arg(long = "abstract")]
    pub abstract_text: String,
}

pub fn run(args: Args) -> Result<()> {
    println!("[system]\n{}\n", prompt::SYSTEM_PROMPT);
    println!("[user]{}", prompt::render_prompt(&args.title, &args.abstract_text));
    Ok(())
}

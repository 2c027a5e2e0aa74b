//! `tracing` setup for the extraction CLI.

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset: per-file progress from this crate, HTTP
/// client internals only when they warn.
const DEFAULT_DIRECTIVES: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn";

/// Install the global subscriber once. Events go to stderr so stdout stays
/// free for `prompt` and `parse` output.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref())
        .or_else(|_| env_filter(None))?;
    let stderr_is_tty = std::io::stderr().is_terminal();
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(stderr_is_tty)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).init();
    Ok(())
}

/// Filter from an explicit directive string, falling back to
/// [`DEFAULT_DIRECTIVES`] when none is given or it is blank.
fn env_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_directive_uses_defaults() {
        let filter = env_filter(Some("  ")).unwrap();
        assert_eq!(filter.to_string(), env_filter(None).unwrap().to_string());
    }

    #[test]
    fn explicit_directive_is_respected() {
        let filter = env_filter(Some("oer_extract=debug")).unwrap();
        assert!(filter.to_string().contains("oer_extract=debug"));
    }

    #[test]
    fn default_directives_parse() {
        assert!(env_filter(None).is_ok());
    }
}

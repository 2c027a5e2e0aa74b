//! Runtime configuration utilities for oer-extract.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_INTERVAL_MS: u64 = 1200;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Folder scanned for `.xls`/`.xlsx` inputs.
    pub input_dir: PathBuf,
    /// Folder receiving one CSV per input workbook.
    pub output_dir: PathBuf,
    /// Model identifier sent with each request and appended to output names.
    pub model: String,
    /// Chat-completions base URL.
    pub llm_base_url: String,
    /// Bearer token for the completion service.
    pub llm_api_key: String,
    /// Fixed pause after every completion call.
    pub request_interval: Duration,
    /// Upper bound on a single completion call.
    pub request_timeout: Duration,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let input_dir = env::var("INPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./input"));
        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./output"));
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let llm_base_url =
            env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let llm_api_key = env::var("LLM_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .unwrap_or_default();
        let request_interval =
            Duration::from_millis(parse_env("REQUEST_INTERVAL_MS", DEFAULT_INTERVAL_MS));
        let request_timeout =
            Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            input_dir,
            output_dir,
            model,
            llm_base_url,
            llm_api_key,
            request_interval,
            request_timeout,
        })
    }

    /// Output path for an input workbook: `<stem>-<model>.csv`.
    pub fn output_path_for<P: AsRef<Path>>(&self, input: P) -> PathBuf {
        let stem = input
            .as_ref()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        self.outputs_join(format!("{stem}-{}.csv", self.model))
    }

    fn outputs_join<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.output_dir.join(path)
    }
}

fn parse_env(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

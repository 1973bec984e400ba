use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";
pub const DEFAULT_MODEL: &str = "grok-beta";

/// Application configuration loaded from environment variables.
/// Only `XAI_API_KEY` has no default; the server runs without it, the CLI does not.
#[derive(Debug, Clone)]
pub struct Config {
    pub xai_api_key: Option<String>,
    pub xai_base_url: String,
    pub model: String,
    pub port: u16,
    pub ui_path: PathBuf,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` is this over `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            xai_api_key: non_empty("XAI_API_KEY"),
            xai_base_url: non_empty("XAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty("XAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: non_empty("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            ui_path: non_empty("UI_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("career_agents_ui.html")),
            llm_timeout_secs: non_empty("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn api_key_configured(&self) -> bool {
        self.xai_api_key.is_some()
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.xai_api_key.as_deref().with_context(|| {
            "Required environment variable 'XAI_API_KEY' is not set. \
             Set it with: export XAI_API_KEY='your-key-here'"
        })
    }
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
/// Every variable has a default; CLI flags override the URL and export dir.
#[derive(Debug, Clone)]
pub struct Config {
    pub analyzer_url: String,
    pub request_timeout: Duration,
    pub export_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            analyzer_url: env_or("ANALYZER_URL", "http://localhost:5000"),
            request_timeout: Duration::from_secs(
                env_or("REQUEST_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            export_dir: PathBuf::from(env_or("EXPORT_DIR", ".")),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

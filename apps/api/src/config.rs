use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON dataset holding the project catalog. Re-read on every request.
    pub data_file: PathBuf,
    /// Directory served by the preview and download endpoints.
    pub downloads_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_file: env_or("DATA_FILE", "data/projects.json").into(),
            downloads_dir: env_or("DOWNLOADS_DIR", "static/downloads").into(),
            port: env_or("PORT", "7323")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

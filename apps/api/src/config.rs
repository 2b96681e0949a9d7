use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The Gemini API key is deliberately optional at startup: the service boots
/// without it so `/health` can report the misconfiguration, and generation
/// requests fail with a configuration error until it is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

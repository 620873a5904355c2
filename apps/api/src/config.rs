use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
///
/// The Google API key is optional: the service starts without it and every
/// oracle call fails fast with a configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub gemini_json_mode: bool,
    pub llm_timeout: Duration,
    pub batch_concurrency: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_json_mode: parse_flag_env("GEMINI_JSON_MODE", true)?,
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 60)?),
            batch_concurrency: parse_env::<usize>("BATCH_CONCURRENCY", 4)?.max(1),
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

/// Boolean switch: true/false, 1/0, yes/no or on/off, any case.
fn parse_flag_env(key: &str, default: bool) -> Result<bool> {
    match optional_env(key) {
        Some(raw) => parse_flag(&raw).ok_or_else(|| {
            anyhow!("Environment variable '{key}' has an invalid value: '{raw}' (expected true/false)")
        }),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

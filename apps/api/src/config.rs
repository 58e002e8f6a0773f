use std::num::NonZeroU32;

use anyhow::{Context, Result};

pub const DEFAULT_SITE_BASE_URL: &str = "https://fractional.quest";

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Without a database the service serves from an empty in-memory page store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Origin used for absolute hreflang and canonical URLs.
    pub site_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            db_max_connections: parse_max_connections(
                &std::env::var("DB_MAX_CONNECTIONS").unwrap_or_else(|_| "10".to_string()),
            )?,
            site_base_url: optional_env("SITE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SITE_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// A zero-sized pool would make every query wait forever, so 0 is rejected.
fn parse_max_connections(raw: &str) -> Result<u32> {
    let value = raw
        .trim()
        .parse::<NonZeroU32>()
        .with_context(|| format!("DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"))?;
    Ok(value.get())
}

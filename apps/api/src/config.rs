use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::jobs::deck::DEFAULT_SWIPE_THRESHOLD_PX;

const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 30 * 60;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file holding a persisted job list. Fixtures are used when unset.
    pub job_list_path: Option<PathBuf>,
    /// Base URL of a real auth backend. The in-memory stub is used when unset.
    pub auth_backend_url: Option<String>,
    pub swipe_threshold_px: f64,
    /// Onboarding drafts and decks idle for longer than this are discarded.
    pub session_idle_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            job_list_path: None,
            auth_backend_url: None,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            session_idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let swipe_threshold_px = match optional_env("SWIPE_THRESHOLD_PX") {
            Some(raw) => parse_threshold(&raw)?,
            None => DEFAULT_SWIPE_THRESHOLD_PX,
        };
        let session_idle_ttl = match optional_env("SESSION_IDLE_TTL_SECS") {
            Some(raw) => parse_idle_ttl(&raw)?,
            None => Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            job_list_path: optional_env("JOB_LIST_PATH").map(PathBuf::from),
            auth_backend_url: optional_env("AUTH_BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            swipe_threshold_px,
            session_idle_ttl,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_threshold(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("SWIPE_THRESHOLD_PX must be a number, got '{raw}'"))?;
    if !value.is_finite() || value <= 0.0 {
        bail!("SWIPE_THRESHOLD_PX must be positive, got {value}");
    }
    Ok(value)
}

fn parse_idle_ttl(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("SESSION_IDLE_TTL_SECS must be a whole number, got '{raw}'"))?;
    if secs == 0 {
        bail!("SESSION_IDLE_TTL_SECS must be positive");
    }
    Ok(Duration::from_secs(secs))
}

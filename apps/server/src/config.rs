use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use fxdash_core::constants::DEFAULT_HISTORY_DAYS;
use fxdash_market_data::provider::nbp::DEFAULT_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub nbp_base_url: String,
    pub provider_timeout: Duration,
    pub provider_max_retries: u32,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
    pub history_days: i64,
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            nbp_base_url: DEFAULT_BASE_URL.to_string(),
            provider_timeout: Duration::from_millis(30_000),
            provider_max_retries: 2,
            request_timeout: Duration::from_millis(30_000),
            cors_allow: vec!["*".to_string()],
            history_days: DEFAULT_HISTORY_DAYS,
            json_logs: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("FXD_LISTEN_ADDR") {
            Ok(value) => value.parse().context("Invalid FXD_LISTEN_ADDR")?,
            Err(_) => defaults.listen_addr,
        };
        let nbp_base_url = std::env::var("FXD_NBP_BASE_URL").unwrap_or(defaults.nbp_base_url);
        let cors_allow = std::env::var("FXD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let provider_timeout_ms = env_number("FXD_PROVIDER_TIMEOUT_MS", 30_000u64);
        let request_timeout_ms = env_number("FXD_REQUEST_TIMEOUT_MS", 30_000u64);
        let log_format = std::env::var("FXD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            nbp_base_url,
            provider_timeout: Duration::from_millis(provider_timeout_ms),
            provider_max_retries: env_number("FXD_PROVIDER_MAX_RETRIES", defaults.provider_max_retries),
            request_timeout: Duration::from_millis(request_timeout_ms),
            cors_allow,
            history_days: env_number("FXD_HISTORY_DAYS", defaults.history_days).max(1),
            json_logs: log_format.eq_ignore_ascii_case("json"),
        })
    }
}

/// Reads a numeric variable, falling back to `default` when unset or invalid.
fn env_number<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

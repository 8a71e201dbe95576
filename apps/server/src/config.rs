use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub const DEFAULT_HOLDINGS_URL: &str = "https://35dee773a9ec441e9f38d5fc249406ce.api.mockbin.io/";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub holdings_url: String,
    pub fetch_timeout: Duration,
    pub request_timeout: Duration,
    /// Dataset read on fallback instead of the bundled one.
    pub fallback_path: Option<PathBuf>,
    pub cors_allow: Vec<String>,
    /// `text` or `json`
    pub log_format: String,
}

fn millis_var(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid TB_LISTEN_ADDR")?;
        let holdings_url =
            std::env::var("TB_HOLDINGS_URL").unwrap_or_else(|_| DEFAULT_HOLDINGS_URL.into());
        let fallback_path = std::env::var("TB_FALLBACK_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let cors_allow = std::env::var("TB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let log_format = std::env::var("TB_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        let fetch_timeout = millis_var("TB_FETCH_TIMEOUT_MS", 30_000);
        let request_timeout = millis_var("TB_REQUEST_TIMEOUT_MS", 30_000);
        Ok(Self {
            listen_addr,
            holdings_url,
            fetch_timeout,
            request_timeout,
            fallback_path,
            cors_allow,
            log_format,
        })
    }
}

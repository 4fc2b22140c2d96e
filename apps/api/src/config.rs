use std::time::Duration;

use anyhow::{ensure, Context, Result};

const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;

/// Credentials and endpoint for the upstream job-search API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values; missing remote credentials only
/// disable the remote source.
#[derive(Debug, Clone)]
pub struct Config {
    pub remote: Option<RemoteConfig>,
    pub remote_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let remote = match (optional("RAPIDAPI_KEY"), optional("RAPIDAPI_HOST")) {
            (Some(api_key), Some(api_host)) => Some(RemoteConfig {
                base_url: optional("JOBS_REMOTE_BASE_URL")
                    .unwrap_or_else(|| format!("https://{api_host}")),
                api_key,
                api_host,
            }),
            _ => None,
        };

        let timeout_ms = match optional("JOBS_REMOTE_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("JOBS_REMOTE_TIMEOUT_MS must be a whole number of milliseconds")?,
            None => DEFAULT_REMOTE_TIMEOUT_MS,
        };
        ensure!(timeout_ms > 0, "JOBS_REMOTE_TIMEOUT_MS must be positive");

        Ok(Config {
            remote,
            remote_timeout: Duration::from_millis(timeout_ms),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]).unwrap();
        assert!(config.remote.is_none());
        assert_eq!(config.remote_timeout, Duration::from_millis(5_000));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_remote_requires_key_and_host() {
        let config = config_from(&[("RAPIDAPI_KEY", "k")]).unwrap();
        assert!(config.remote.is_none());

        let config = config_from(&[("RAPIDAPI_KEY", "k"), ("RAPIDAPI_HOST", "  ")]).unwrap();
        assert!(config.remote.is_none());
    }

    #[test]
    fn test_remote_base_url_derived_from_host() {
        let config =
            config_from(&[("RAPIDAPI_KEY", "k"), ("RAPIDAPI_HOST", "jsearch.p.rapidapi.com")])
                .unwrap();
        let remote = config.remote.unwrap();
        assert_eq!(remote.base_url, "https://jsearch.p.rapidapi.com");
        assert_eq!(remote.api_key, "k");
    }

    #[test]
    fn test_remote_base_url_override() {
        let config = config_from(&[
            ("RAPIDAPI_KEY", "k"),
            ("RAPIDAPI_HOST", "jsearch.p.rapidapi.com"),
            ("JOBS_REMOTE_BASE_URL", "http://127.0.0.1:9000"),
        ])
        .unwrap();
        assert_eq!(config.remote.unwrap().base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_numbers_fail() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("JOBS_REMOTE_TIMEOUT_MS", "soon")]).is_err());
        assert!(config_from(&[("JOBS_REMOTE_TIMEOUT_MS", "0")]).is_err());
    }
}

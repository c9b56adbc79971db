//! Runtime configuration read from the environment (and `.env` when present).

use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 10;
pub const DEFAULT_DIAGNOSTIC_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_DIAGNOSTIC_URL: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_DIAGNOSTIC_TIMEOUT_SECS: u64 = 12;

#[derive(Debug, Clone)]
pub struct DiagnosticConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub max_upload_bytes: usize,
    pub workers: usize,
    /// `None` when no API key is configured; the diagnostic step is then skipped.
    pub diagnostic: Option<DiagnosticConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: DEFAULT_BIND.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            workers: std::cmp::max(1, num_cpus::get()),
            diagnostic: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = get("SCHEDSIFT_BIND").unwrap_or(defaults.bind);
        let max_upload_mb = parse_or(get("SCHEDSIFT_MAX_UPLOAD_MB"), "SCHEDSIFT_MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB);
        let workers = parse_or(get("SCHEDSIFT_WORKERS"), "SCHEDSIFT_WORKERS", defaults.workers).max(1);

        let diagnostic = get("ANTHROPIC_API_KEY").map(|api_key| DiagnosticConfig {
            api_key,
            model: get("SCHEDSIFT_DIAGNOSTIC_MODEL").unwrap_or_else(|| DEFAULT_DIAGNOSTIC_MODEL.to_string()),
            base_url: get("SCHEDSIFT_DIAGNOSTIC_URL").unwrap_or_else(|| DEFAULT_DIAGNOSTIC_URL.to_string()),
            timeout: Duration::from_secs(parse_or(
                get("SCHEDSIFT_DIAGNOSTIC_TIMEOUT_SECS"),
                "SCHEDSIFT_DIAGNOSTIC_TIMEOUT_SECS",
                DEFAULT_DIAGNOSTIC_TIMEOUT_SECS,
            )),
        });

        AppConfig {
            bind,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            workers,
            diagnostic,
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        Some(v) => match v.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("ignoring unparseable {}={:?}, using default", key, v);
                default
            }
        },
        None => default,
    }
}

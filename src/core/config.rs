use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use super::ConsultaError;
use crate::persistence::{
    data_file_exists,
    load_json_or_default,
    save_json,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_URL_ENV: &str = "CONSULTA_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";
/// Upper bound for a single wait between retries, whatever `settings.json` says.
pub const MAX_RETRY_BACKOFF: Duration = Duration::from_secs(5);

/// Where the lookup service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub timeout_secs: u64,
    /// Extra attempts after a transport failure. Service errors are never retried.
    pub retry_attempts: u32,
    pub retry_backoff_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            retry_attempts: 0,
            retry_backoff_ms: 500,
        }
    }
}

impl Settings {
    /// Settings file, then the environment. Writes the defaults out on first run so they
    /// can be edited.
    pub fn load() -> Self {
        let mut settings = load_json_or_default::<Settings>(SETTINGS_FILE);

        if !data_file_exists(SETTINGS_FILE) {
            if let Err(e) = settings.save() {
                warn!(error = %e, "could not write default settings");
            }
        }

        settings.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        info!(api_url = %settings.api_url, timeout_secs = settings.timeout_secs, "settings ready");
        settings
    }

    pub fn save(&self) -> Result<(), ConsultaError> {
        save_json(self, SETTINGS_FILE)
    }

    pub fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms).min(MAX_RETRY_BACKOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_url": "https://puntajes.example/api"}"#).unwrap();
        assert_eq!(settings.api_url, "https://puntajes.example/api");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.retry_attempts, 0);
    }

    #[test]
    fn test_env_override() {
        let mut settings = Settings::default();

        settings.apply_api_url_override(Some("  ".to_string()));
        assert_eq!(settings.api_url, DEFAULT_API_URL);

        settings.apply_api_url_override(Some("http://10.0.0.2:5000/api".to_string()));
        assert_eq!(settings.api_url, "http://10.0.0.2:5000/api");
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let settings = Settings { timeout_secs: 0, ..Settings::default() };
        assert_eq!(settings.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_huge_backoff_is_capped() {
        let settings = Settings { retry_backoff_ms: u64::MAX, ..Settings::default() };
        assert_eq!(settings.retry_backoff(), MAX_RETRY_BACKOFF);

        let settings = Settings { retry_backoff_ms: 250, ..Settings::default() };
        assert_eq!(settings.retry_backoff(), Duration::from_millis(250));
    }
}

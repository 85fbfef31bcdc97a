//! Runtime configuration: API endpoint settings and page defaults.
//!
//! Values come from compile-time env (`option_env!`, which also works on WASM)
//! and, on native targets, from the process environment at startup. Runtime
//! values win over compile-time ones.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use thiserror::Error;

pub const ENV_API_BASE_URL: &str = "ALX_API_BASE_URL";
pub const ENV_API_TIMEOUT_MS: &str = "ALX_API_TIMEOUT_MS";
pub const ENV_API_RETRY_ATTEMPTS: &str = "ALX_API_RETRY_ATTEMPTS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer (got {value:?})")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub retry_attempts: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.example.com".to_string(),
            timeout_ms: 10_000,
            retry_attempts: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub currency: &'static str,
    pub language: &'static str,
    pub items_per_page: usize,
    pub max_guests: u32,
    pub min_price: u32,
    pub max_price: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            currency: "USD",
            language: "en",
            items_per_page: 12,
            max_guests: 16,
            min_price: 0,
            max_price: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub defaults: Defaults,
}

impl AppConfig {
    /// Resolve configuration from an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api = ApiConfig::default();

        if let Some(url) = lookup(ENV_API_BASE_URL) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty {
                    key: ENV_API_BASE_URL,
                });
            }
            api.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            api.timeout_ms = parse_number(ENV_API_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_API_RETRY_ATTEMPTS) {
            api.retry_attempts = parse_number(ENV_API_RETRY_ATTEMPTS, &raw)?;
        }

        Ok(Self {
            api,
            defaults: Defaults::default(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_value)
    }
}

/// One-line summary for the startup log.
impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { api, defaults } = self;
        write!(
            f,
            "api={} timeout={}ms retries={} currency={} language={} page={} guests<={} price={}..={}",
            api.base_url,
            api.timeout_ms,
            api.retry_attempts,
            defaults.currency,
            defaults.language,
            defaults.items_per_page,
            defaults.max_guests,
            defaults.min_price,
            defaults.max_price,
        )
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

fn env_value(key: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(value) = std::env::var(key) {
            return Some(value);
        }
    }
    compile_time_env().get(key).map(|v| v.to_string())
}

fn compile_time_env() -> HashMap<&'static str, &'static str> {
    [
        (ENV_API_BASE_URL, option_env!("ALX_API_BASE_URL")),
        (ENV_API_TIMEOUT_MS, option_env!("ALX_API_TIMEOUT_MS")),
        (ENV_API_RETRY_ATTEMPTS, option_env!("ALX_API_RETRY_ATTEMPTS")),
    ]
    .into_iter()
    .filter_map(|(k, v)| v.map(|v| (k, v)))
    .collect()
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match AppConfig::from_env() {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!("invalid configuration ({err}); using defaults");
        AppConfig::default()
    }
});

/// Process-wide configuration, resolved on first access.
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_without_overrides() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.defaults.currency, "USD");
        assert_eq!(config.defaults.max_guests, 16);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_BASE_URL, "https://staging.example.org/"),
            (ENV_API_TIMEOUT_MS, " 2500 "),
            (ENV_API_RETRY_ATTEMPTS, "0"),
        ]))
        .unwrap();
        assert_eq!(config.api.base_url, "https://staging.example.org");
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.api.retry_attempts, 0);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_API_TIMEOUT_MS, "ten")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: ENV_API_TIMEOUT_MS,
                value: "ten".into()
            }
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_API_BASE_URL, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { key: ENV_API_BASE_URL });
    }

    #[test]
    fn summary_lists_every_setting() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_BASE_URL, "https://listings.test/"),
            (ENV_API_RETRY_ATTEMPTS, "5"),
        ]))
        .unwrap();
        assert_eq!(
            config.to_string(),
            "api=https://listings.test timeout=10000ms retries=5 currency=USD language=en \
             page=12 guests<=16 price=0..=10000"
        );
    }
}

use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ConfigError;

/// Live backend origin.
pub const DEFAULT_BASE_URL: &str = "https://bloodbank-backend-1.onrender.com";

pub const BASE_URL_VAR: &str = "BLOODBANK_API_BASE_URL";
pub const REDIRECT_DELAY_VAR: &str = "BLOODBANK_REDIRECT_DELAY_MS";
pub const BANNER_TTL_VAR: &str = "BLOODBANK_BANNER_TTL_MS";

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load the origin from `BLOODBANK_API_BASE_URL`, falling back to the live backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_value(env::var(BASE_URL_VAR).ok())
    }

    pub fn from_value(base_url: Option<String>) -> Result<Self, ConfigError> {
        match base_url {
            Some(value) if !value.trim().is_empty() => {
                let value = value.trim();
                Url::parse(value).map_err(|e| ConfigError::InvalidBaseUrl {
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
                let base_url = value.trim_end_matches('/').to_string();
                info!("Using API base URL {}", base_url);
                Ok(Self { base_url })
            }
            _ => {
                debug!("{} not set, using {}", BASE_URL_VAR, DEFAULT_BASE_URL);
                Ok(Self::default())
            }
        }
    }
}

/// Delays used by the form controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    /// Pause between the login success banner and the redirect.
    pub redirect_delay: Duration,
    /// How long a banner stays on the page.
    pub banner_ttl: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_millis(1500),
            banner_ttl: Duration::from_secs(5),
        }
    }
}

impl FormTimings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_values(
            env::var(REDIRECT_DELAY_VAR).ok(),
            env::var(BANNER_TTL_VAR).ok(),
        )
    }

    pub fn from_values(
        redirect_delay_ms: Option<String>,
        banner_ttl_ms: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            redirect_delay: parse_millis(REDIRECT_DELAY_VAR, redirect_delay_ms)?
                .unwrap_or(defaults.redirect_delay),
            banner_ttl: parse_millis(BANNER_TTL_VAR, banner_ttl_ms)?
                .unwrap_or(defaults.banner_ttl),
        })
    }
}

fn parse_millis(name: &'static str, value: Option<String>) -> Result<Option<Duration>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}

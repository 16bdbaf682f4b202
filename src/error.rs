use thiserror::Error;

/// Errors raised while talking to the backend.
///
/// Only `Build` ever reaches callers; the others are folded into
/// `RequestResult::Failed` by `BloodBankClient::request`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON body (status {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

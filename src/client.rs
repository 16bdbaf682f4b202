use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::appointment::AppointmentSubmission;
use crate::models::auth::{LoginRequest, RegisterRequest, VerifyOtpRequest};
use crate::models::common::RequestResult;

/// Per-request options.
///
/// `headers`, when given, replaces the default header set as a whole.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Option<HeaderMap>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: None,
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Headers sent when the caller does not supply its own.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Client for the blood bank backend API
#[derive(Debug, Clone)]
pub struct BloodBankClient {
    client: Client,
    base_url: String,
}

impl BloodBankClient {
    /// Create a client bound to the live backend
    pub fn new() -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        // The cookie store carries the backend session between calls
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request and wrap the outcome.
    ///
    /// The body is parsed as JSON whatever the status code. A transport
    /// failure or an undecodable body yields `RequestResult::Failed`.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> RequestResult {
        let url = format!("{}{}", self.base_url, endpoint);

        match self.send(&url, options).await {
            Ok((status, data)) => RequestResult::from_response(status, data),
            Err(err) => {
                error!("API request failed: {}", err);
                RequestResult::failed(err.to_string())
            }
        }
    }

    async fn send(&self, url: &str, options: RequestOptions) -> Result<(u16, Value), ClientError> {
        let RequestOptions {
            method,
            headers,
            body,
        } = options;

        info!("Making {} request to {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .headers(headers.unwrap_or_else(default_headers));

        if let Some(body) = body {
            debug!("Request body: {}", body);
            request = request.body(body);
        }

        let res = request.send().await?;
        let status = res.status().as_u16();
        info!("Response received with status: {}", status);

        let bytes = res.bytes().await?;
        let data = serde_json::from_slice(&bytes)
            .map_err(|source| ClientError::InvalidBody { status, source })?;

        Ok((status, data))
    }

    async fn post_json<T: Serialize>(&self, endpoint: &str, payload: &T) -> RequestResult {
        match serde_json::to_string(payload) {
            Ok(body) => self.request(endpoint, RequestOptions::post().with_body(body)).await,
            Err(err) => {
                error!("Failed to serialize request for {}: {}", endpoint, err);
                RequestResult::failed(err.to_string())
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> RequestResult {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/api/login", &payload).await
    }

    pub async fn register(&self, payload: &RegisterRequest) -> RequestResult {
        self.post_json("/api/register", payload).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> RequestResult {
        let payload = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        self.post_json("/api/verify-otp", &payload).await
    }

    pub async fn logout(&self) -> RequestResult {
        self.request("/api/logout", RequestOptions::post()).await
    }

    pub async fn get_current_user(&self) -> RequestResult {
        self.request("/api/user", RequestOptions::default()).await
    }

    pub async fn submit_customer_appointment(&self, appointment: &AppointmentSubmission) -> RequestResult {
        self.post_json("/api/submit-customer", appointment).await
    }

    pub async fn health_check(&self) -> RequestResult {
        self.request("/api/health", RequestOptions::default()).await
    }
}

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use crate::config::ClientConfig;
use crate::BloodBankClient;

pub const GOOD_PASSWORD: &str = "secret";
pub const GOOD_OTP: &str = "123456";

/// A request as seen by the stub backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Debug, Default)]
pub struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    sessions: Mutex<HashMap<String, Value>>,
}

impl StubState {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

/// Blood bank backend stand-in bound to an ephemeral local port.
pub struct StubBackend {
    pub addr: SocketAddr,
    pub state: Arc<StubState>,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> BloodBankClient {
        let config = ClientConfig::from_value(Some(self.base_url())).unwrap();
        BloodBankClient::from_config(&config).unwrap()
    }
}

/// Origin with nothing listening on it.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(str::trim)
                .find_map(|c| c.strip_prefix("session="))
                .map(str::to_string)
        })
        .filter(|token| !token.is_empty())
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        headers: headers
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect(),
        body: body.clone(),
    });

    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    match (method.as_str(), path.as_str()) {
        ("POST", "/api/login") => {
            let email = payload["email"].as_str().unwrap_or_default().to_string();
            match payload["password"].as_str() {
                Some(GOOD_PASSWORD) => {
                    let user_type = if email.starts_with("admin") { "admin" } else { "donor" };
                    let token = format!("token-{}", email);
                    let user = json!({ "email": email, "user_type": user_type });
                    state.sessions.lock().unwrap().insert(token.clone(), user.clone());

                    let mut body = user;
                    body["message"] = json!("Login successful");
                    (
                        StatusCode::OK,
                        [(header::SET_COOKIE, format!("session={}; Path=/", token))],
                        Json(body),
                    )
                        .into_response()
                }
                // Rejection without an error field
                Some("silent") => json_response(StatusCode::UNAUTHORIZED, json!({})),
                Some("blank") => json_response(StatusCode::UNAUTHORIZED, json!({ "error": "" })),
                _ => json_response(
                    StatusCode::UNAUTHORIZED,
                    json!({ "error": "Invalid email or password" }),
                ),
            }
        }
        ("POST", "/api/register") => {
            if payload["user_type"].is_string() {
                json_response(
                    StatusCode::CREATED,
                    json!({ "message": "OTP sent", "email": payload["email"] }),
                )
            } else {
                json_response(StatusCode::BAD_REQUEST, json!({ "error": "user_type is required" }))
            }
        }
        ("POST", "/api/verify-otp") => {
            if payload["otp"].as_str() == Some(GOOD_OTP) {
                json_response(StatusCode::OK, json!({ "message": "Verified" }))
            } else {
                json_response(StatusCode::BAD_REQUEST, json!({ "error": "Invalid OTP" }))
            }
        }
        ("POST", "/api/logout") => {
            if let Some(token) = session_cookie(&headers) {
                state.sessions.lock().unwrap().remove(&token);
            }
            (
                StatusCode::OK,
                [(header::SET_COOKIE, "session=; Path=/; Max-Age=0".to_string())],
                Json(json!({ "message": "Logged out" })),
            )
                .into_response()
        }
        ("GET", "/api/user") => {
            let user = session_cookie(&headers)
                .and_then(|token| state.sessions.lock().unwrap().get(&token).cloned());
            match user {
                Some(user) => json_response(StatusCode::OK, user),
                None => json_response(StatusCode::UNAUTHORIZED, json!({ "error": "Not logged in" })),
            }
        }
        ("POST", "/api/submit-customer") => match payload["name"].as_str() {
            Some("") | None => json_response(
                StatusCode::BAD_REQUEST,
                json!({ "message": "All fields are required" }),
            ),
            // Rejection without a message field
            Some("Quiet") => json_response(StatusCode::CONFLICT, json!({ "error": "slot taken" })),
            // Server blows up with an HTML page
            Some("Crash") => html_error(),
            Some("Blank") => json_response(StatusCode::BAD_REQUEST, json!({ "message": "" })),
            Some(_) => json_response(
                StatusCode::CREATED,
                json!({
                    "message": format!(
                        "Appointment booked for {} at {}",
                        payload["appointment_date"].as_str().unwrap_or_default(),
                        payload["time_slot"].as_str().unwrap_or_default()
                    )
                }),
            ),
        },
        ("GET", "/api/health") => json_response(StatusCode::OK, json!({ "status": "healthy" })),
        ("GET", "/api/payload-error") => json_response(
            StatusCode::OK,
            json!({ "success": false, "status": "error" }),
        ),
        ("GET", "/api/html-error") => html_error(),
        ("GET", "/api/empty") => Response::new(Body::empty()),
        _ => json_response(StatusCode::NOT_FOUND, json!({ "error": "Not found" })),
    }
}

fn html_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/html")],
        "<html><body>Internal Server Error</body></html>",
    )
        .into_response()
}

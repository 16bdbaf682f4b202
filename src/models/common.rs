use serde::Serialize;
use serde_json::Value;

/// Outcome of a single API call.
///
/// The two variants have different shapes: a parsed response carries the
/// body and status, a failed call only carries the error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestResult {
    Response {
        success: bool,
        data: Value,
        status: u16,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl RequestResult {
    pub fn from_response(status: u16, data: Value) -> Self {
        RequestResult::Response {
            success: (200..300).contains(&status),
            data,
            status,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        RequestResult::Failed {
            success: false,
            error: error.into(),
        }
    }

    pub fn success(&self) -> bool {
        match self {
            RequestResult::Response { success, .. } | RequestResult::Failed { success, .. } => {
                *success
            }
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            RequestResult::Response { data, .. } => Some(data),
            RequestResult::Failed { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestResult::Response { status, .. } => Some(*status),
            RequestResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestResult::Failed { error, .. } => Some(error),
            RequestResult::Response { .. } => None,
        }
    }

    /// String field of the response body, if present.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data().and_then(|data| data.get(key)).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_follows_status_only() {
        assert!(RequestResult::from_response(200, json!({"status": "error"})).success());
        assert!(RequestResult::from_response(204, Value::Null).success());
        assert!(RequestResult::from_response(299, json!({})).success());
        assert!(!RequestResult::from_response(199, json!({})).success());
        assert!(!RequestResult::from_response(300, json!({})).success());
        assert!(!RequestResult::from_response(401, json!({"success": true})).success());
    }

    #[test]
    fn test_shapes_serialize_differently() {
        let ok = serde_json::to_value(RequestResult::from_response(201, json!({"id": 7}))).unwrap();
        assert_eq!(ok, json!({"success": true, "data": {"id": 7}, "status": 201}));

        let failed = serde_json::to_value(RequestResult::failed("connection refused")).unwrap();
        assert_eq!(failed, json!({"success": false, "error": "connection refused"}));
    }

    #[test]
    fn test_accessors() {
        let result = RequestResult::from_response(400, json!({"error": "bad", "code": 3}));
        assert_eq!(result.status(), Some(400));
        assert_eq!(result.data_str("error"), Some("bad"));
        assert_eq!(result.data_str("code"), None);
        assert_eq!(result.error(), None);

        let failed = RequestResult::failed("timeout");
        assert_eq!(failed.data(), None);
        assert_eq!(failed.data_str("error"), None);
        assert_eq!(failed.error(), Some("timeout"));
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Body shared by every response: `{ success, data?, error?, message?, code?, status, timestamp }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub status: &'static str,
    #[serde(serialize_with = "rfc3339")]
    pub timestamp: DateTime<Utc>,
}

fn rfc3339<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            code: None,
            status: "success",
            timestamp: Utc::now(),
        }
    }

    pub fn failure(code: &'static str, error: String, data: Option<T>) -> Self {
        Self {
            success: false,
            data,
            error: Some(error),
            message: None,
            code: Some(code),
            status: "error",
            timestamp: Utc::now(),
        }
    }
}

/// A success envelope with its HTTP status.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: Envelope<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Envelope::success(data),
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Envelope::success(data),
        }
    }

    /// Health-check failure that still carries its diagnostic payload.
    pub fn unavailable(data: T, reason: String) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: Envelope::failure("SERVICE_UNAVAILABLE", reason, Some(data)),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error_fields() {
        let body = serde_json::to_value(Envelope::success(vec![1, 2])).expect("json");
        assert_eq!(body["success"], true);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], serde_json::json!([1, 2]));
        assert!(body.get("error").is_none());
        assert!(body.get("code").is_none());
        let timestamp = body["timestamp"].as_str().expect("string");
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn failure_envelope_carries_code() {
        let body = serde_json::to_value(Envelope::<()>::failure(
            "NOT_FOUND",
            "quest not found".to_string(),
            None,
        ))
        .expect("json");
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "quest not found");
        assert!(body.get("data").is_none());
    }
}

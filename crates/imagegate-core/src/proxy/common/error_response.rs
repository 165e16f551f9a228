//! JSON error envelope rendered at the request boundary.
//!
//! Every `ProxyError` becomes `{"error": {"message", "type", ...}}` with the
//! status from [`ProxyError::http_status_code`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use imagegate_types::ProxyError;
use serde_json::{json, Map, Value};

#[derive(Debug)]
pub struct ApiError(pub ProxyError);

impl From<ProxyError> for ApiError {
    fn from(e: ProxyError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self(ProxyError::PayloadTooLarge {
                message: format!("Request body too large: {}", rejection.body_text()),
            });
        }
        Self(ProxyError::invalid_request(format!("Invalid JSON body: {}", rejection.body_text())))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status_code()).unwrap_or(StatusCode::BAD_GATEWAY);

        let mut error = Map::new();
        error.insert("message".to_string(), Value::String(self.0.to_string()));
        error.insert("type".to_string(), Value::String(self.0.error_type().to_string()));

        match self.0 {
            ProxyError::Upstream { status: code, body } => {
                error.insert("code".to_string(), json!(code));
                let upstream = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
                error.insert("upstream".to_string(), upstream);
            },
            ProxyError::NoImageData { upstream_response } => {
                error.insert("upstream_response".to_string(), upstream_response);
            },
            _ => {},
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

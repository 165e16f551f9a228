//! Request translation errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while translating a single image-generation request.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ProxyError {
    /// Required caller input missing or unusable
    #[error("{message}")]
    InvalidRequest { message: String },

    /// Request body exceeded the accepted size
    #[error("{message}")]
    PayloadTooLarge { message: String },

    /// Required server-side configuration missing
    #[error("Server configuration error: {message}")]
    Configuration { message: String },

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status}")]
    Upstream { status: u16, body: String },

    /// Upstream call exceeded the configured bound
    #[error("Upstream request timeout after {duration_secs}s")]
    Timeout { duration_secs: u64 },

    /// No image payload found where the output mode requires one
    #[error("No image data in upstream response")]
    NoImageData { upstream_response: Value },

    /// Upstream body was not valid JSON
    #[error("Malformed upstream response: {message}")]
    MalformedUpstreamResponse { message: String },

    /// Upstream unreachable (connect, DNS, TLS)
    #[error("Network error: {message}")]
    Network { message: String },
}

impl ProxyError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Get HTTP status code for this error.
    ///
    /// Upstream statuses are forwarded as-is; anything outside the valid
    /// range collapses to 502.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::Configuration { .. } => 500,
            Self::Upstream { status, .. } => {
                if (100..=999).contains(status) {
                    *status
                } else {
                    502
                }
            },
            Self::Timeout { .. } => 504,
            Self::NoImageData { .. } => 500,
            Self::MalformedUpstreamResponse { .. } => 500,
            Self::Network { .. } => 502,
        }
    }

    /// Machine-readable `type` field of the JSON error envelope.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request_error",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::Configuration { .. } => "configuration_error",
            Self::Upstream { .. } => "upstream_error",
            Self::Timeout { .. } => "timeout_error",
            Self::NoImageData { .. } => "no_image_data",
            Self::MalformedUpstreamResponse { .. } => "malformed_upstream_response",
            Self::Network { .. } => "network_error",
        }
    }
}

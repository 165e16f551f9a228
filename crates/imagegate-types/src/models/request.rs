//! Inbound generation request model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::ProxyError;

pub const DEFAULT_MIME_TYPE: &str = "image/png";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output shape the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Forward the upstream body unchanged.
    #[default]
    Passthrough,
    /// Reshape into `{created, data: [{b64_json, revised_prompt}]}`.
    OpenAiCompatible,
}

impl OutputMode {
    pub fn from_openai_flag(enabled: bool) -> Self {
        if enabled {
            Self::OpenAiCompatible
        } else {
            Self::Passthrough
        }
    }

    /// Value for the `x-api-format` response header.
    pub fn api_format(self) -> &'static str {
        match self {
            Self::Passthrough => "gemini",
            Self::OpenAiCompatible => "openai",
        }
    }

    /// Value for the `x-openai-mode` response header.
    pub fn openai_mode(self) -> &'static str {
        match self {
            Self::Passthrough => "native",
            Self::OpenAiCompatible => "enabled",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Passthrough => write!(f, "passthrough"),
            OutputMode::OpenAiCompatible => write!(f, "openai"),
        }
    }
}

/// A parsed image-generation request.
///
/// `target_url`, `api_key` and `openai` are only read from the body on the
/// proxy route; the other routes leave them unset.
#[derive(Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_mime_type: String,
    pub temperature: f64,
    pub target_url: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub openai: bool,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("prompt", &self.prompt)
            .field("response_mime_type", &self.response_mime_type)
            .field("temperature", &self.temperature)
            .field("target_url", &self.target_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("openai", &self.openai)
            .finish()
    }
}

impl GenerationRequest {
    /// Parse a generate/images body. Override fields are ignored.
    pub fn from_body(body: &Value) -> Result<Self, ProxyError> {
        let prompt = body
            .get("prompt")
            .and_then(|v| v.as_str())
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ProxyError::invalid_request("Missing 'prompt' field"))?;

        let response_mime_type = non_empty_str(body, "response_mime_type")
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        let temperature =
            body.get("temperature").and_then(|v| v.as_f64()).unwrap_or(DEFAULT_TEMPERATURE);

        Ok(Self {
            prompt: prompt.to_string(),
            response_mime_type,
            temperature,
            target_url: None,
            api_key: None,
            openai: false,
        })
    }

    /// Parse a proxy body, which may also carry `target_url`, `key` and `openai`.
    pub fn from_proxy_body(body: &Value) -> Result<Self, ProxyError> {
        let mut request = Self::from_body(body)?;
        request.target_url = non_empty_str(body, "target_url").map(str::to_string);
        request.api_key = non_empty_str(body, "key").map(str::to_string);
        request.openai = body.get("openai").is_some_and(is_truthy);
        Ok(request)
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_openai_flag(self.openai)
    }
}

fn non_empty_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(|v| v.as_str()).map(str::trim).filter(|s| !s.is_empty())
}

/// Loose truthiness for flags sent by scripts and browser forms.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "false" && s != "0",
        Value::Array(_) | Value::Object(_) => true,
    }
}

//! Upstream generateContent request types.
//!
//! Responses are deliberately left as `serde_json::Value`: pass-through mode
//! must forward them byte-for-byte in meaning, including fields this crate
//! does not know about.

use serde::{Deserialize, Serialize};

/// Gemini content role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GeminiRole {
    User,
}

/// Text part of an outgoing prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiTextPart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiContent {
    pub role: GeminiRole,
    pub parts: Vec<GeminiTextPart>,
}

/// Generation config; the upstream expects snake_case keys here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiGenerationConfig {
    pub response_mime_type: String,
    pub temperature: f64,
}

/// Body posted to the upstream endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GeminiGenerationConfig,
}

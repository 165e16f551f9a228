//! Self-description returned by `GET /api/endpoints`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointCatalog {
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    /// `gemini`, `openai` or `custom`.
    pub format: String,
    pub description: String,
}

impl EndpointInfo {
    pub fn new(path: &str, method: &str, format: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            format: format.to_string(),
            description: description.to_string(),
        }
    }
}

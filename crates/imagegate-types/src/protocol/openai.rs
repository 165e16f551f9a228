//! OpenAI Images API response types.

use serde::{Deserialize, Serialize};

/// `POST /v1/images/generations` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesResponse {
    /// Unix timestamp in seconds.
    pub created: i64,
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageDatum {
    pub b64_json: String,
    pub revised_prompt: String,
}

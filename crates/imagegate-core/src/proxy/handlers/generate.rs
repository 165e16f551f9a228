// Gemini-format generate handler (pass-through)

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::Response;
use imagegate_types::{GenerationRequest, OutputMode};
use serde_json::Value;
use tracing::info;

use super::common::{configured_upstream, diagnostic_response, translate};
use super::{HEADER_API_FORMAT, HEADER_FINAL_DESTINATION};
use crate::proxy::common::ApiError;
use crate::proxy::server::AppState;

/// POST /api/generate
///
/// Forwards to the configured upstream and returns its body unchanged.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let request = GenerationRequest::from_body(&body)?;
    let upstream = configured_upstream(&state)?;
    let mode = OutputMode::Passthrough;

    info!(
        "[Generate] Received request: prompt={:.50}..., mime={}, temperature={}",
        request.prompt, request.response_mime_type, request.temperature
    );

    let translated = translate(&state, &request, &upstream, mode).await?;

    Ok(diagnostic_response(
        translated,
        [
            (HEADER_FINAL_DESTINATION, upstream.destination()),
            (HEADER_API_FORMAT, mode.api_format().to_string()),
        ],
    ))
}

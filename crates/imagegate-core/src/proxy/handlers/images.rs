// OpenAI images handler (DALL-E compatible response shape)

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

/// OpenAI Images API: POST /api/v1/images/generations (and /v1/images/generations)
///
/// OpenAI-only fields (`n`, `size`, `model`, ...) are accepted and ignored;
/// exactly one image is requested upstream.
pub async fn handle_images_generations(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let request = GenerationRequest::from_body(&body)?;
    let upstream = configured_upstream(&state)?;
    let mode = OutputMode::OpenAiCompatible;

    info!(
        "[Images] Received request: prompt={:.50}..., mime={}",
        request.prompt, request.response_mime_type
    );

    let translated = translate(&state, &request, &upstream, mode).await?;

    tracing::info!("[Images] Successfully generated image");

    Ok(diagnostic_response(
        translated,
        [
            (HEADER_FINAL_DESTINATION, upstream.destination()),
            (HEADER_API_FORMAT, mode.api_format().to_string()),
        ],
    ))
}

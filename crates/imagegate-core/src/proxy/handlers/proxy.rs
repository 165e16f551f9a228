// Custom upstream proxy handler

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::Response;
use imagegate_types::{GenerationRequest, ProxyError};
use serde_json::Value;
use tracing::info;
use url::Url;

use super::common::{diagnostic_response, translate, ResolvedUpstream};
use super::{HEADER_FINAL_DESTINATION, HEADER_OPENAI_MODE};
use crate::proxy::common::ApiError;
use crate::proxy::server::AppState;

/// POST /proxy
///
/// Body may override the upstream with `target_url` / `key` and pick the
/// output shape with `openai`.
pub async fn handle_proxy(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let request = GenerationRequest::from_proxy_body(&body)?;
    let upstream = resolve_upstream(&state, &request)?;
    let mode = request.output_mode();

    info!(
        "[Proxy] Received request: destination={}, mode={}, override={}, prompt={:.50}...",
        upstream.destination(),
        mode,
        request.target_url.is_some(),
        request.prompt
    );

    let translated = translate(&state, &request, &upstream, mode).await?;

    Ok(diagnostic_response(
        translated,
        [
            (HEADER_FINAL_DESTINATION, upstream.destination()),
            (HEADER_OPENAI_MODE, mode.openai_mode().to_string()),
        ],
    ))
}

/// Per-request values win over server defaults, independently for the URL
/// and the key.
pub fn resolve_upstream(
    state: &AppState,
    request: &GenerationRequest,
) -> Result<ResolvedUpstream, ProxyError> {
    let missing = || ProxyError::invalid_request("Missing target_url or key");

    let credential = request
        .api_key
        .clone()
        .or_else(|| state.defaults.api_key.clone())
        .ok_or_else(missing)?;

    let endpoint = match request.target_url.as_deref() {
        Some(raw) => parse_target_url(raw)?,
        None => state.defaults.target_url.clone().ok_or_else(missing)?,
    };

    Ok(ResolvedUpstream { endpoint, credential })
}

fn parse_target_url(raw: &str) -> Result<Url, ProxyError> {
    let url = Url::parse(raw)
        .map_err(|e| ProxyError::invalid_request(format!("Invalid target_url: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProxyError::invalid_request(format!(
            "Invalid target_url: unsupported scheme '{}'",
            other
        ))),
    }
}

// Shared translation pipeline for the POST handlers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use imagegate_types::{GenerationRequest, OutputMode, ProxyError};
use std::fmt;
use url::Url;

use crate::proxy::mappers::{
    build_upstream_request, extract_image, format_response, NormalizedResponse,
};
use crate::proxy::server::AppState;
use crate::proxy::upstream::endpoint::redact_credential;

/// Endpoint and credential a request will be sent with.
pub struct ResolvedUpstream {
    pub endpoint: Url,
    pub credential: String,
}

impl fmt::Debug for ResolvedUpstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedUpstream")
            .field("endpoint", &self.destination())
            .field("credential", &"***")
            .finish()
    }
}

impl ResolvedUpstream {
    /// Endpoint without the credential, safe for headers and logs.
    pub fn destination(&self) -> String {
        redact_credential(&self.endpoint)
    }
}

/// Server defaults, required on the generate and images routes.
pub fn configured_upstream(state: &AppState) -> Result<ResolvedUpstream, ProxyError> {
    let endpoint = state
        .defaults
        .target_url
        .clone()
        .ok_or_else(|| ProxyError::configuration("TARGET_URL is not configured"))?;
    let credential = state
        .defaults
        .api_key
        .clone()
        .ok_or_else(|| ProxyError::configuration("API_KEY is not configured"))?;

    Ok(ResolvedUpstream { endpoint, credential })
}

/// Normalized body plus the status it is returned with.
#[derive(Debug)]
pub struct Translated {
    pub status: StatusCode,
    pub body: NormalizedResponse,
}

/// Pass-through keeps the upstream 2xx status; the OpenAI shape is always 200.
fn response_status(mode: OutputMode, upstream_status: u16) -> StatusCode {
    match mode {
        OutputMode::Passthrough => StatusCode::from_u16(upstream_status).unwrap_or(StatusCode::OK),
        OutputMode::OpenAiCompatible => StatusCode::OK,
    }
}

/// Adapt, call, extract, format.
pub async fn translate(
    state: &AppState,
    request: &GenerationRequest,
    upstream: &ResolvedUpstream,
    mode: OutputMode,
) -> Result<Translated, ProxyError> {
    let body = build_upstream_request(request);
    let reply = state.upstream.call(&body, &upstream.endpoint, &upstream.credential).await?;
    let status = response_status(mode, reply.status);
    let response = reply.body;

    let extracted = extract_image(&response);
    match &extracted {
        Some(image) => tracing::debug!(
            "[Translate] found {} payload ({} base64 chars)",
            image.mime_type,
            image.data.len()
        ),
        None => tracing::debug!("[Translate] no image payload in upstream response"),
    }

    let body = format_response(response, extracted, mode, &request.prompt)?;
    Ok(Translated { status, body })
}

/// Normalized body with the diagnostic headers.
pub fn diagnostic_response(
    translated: Translated,
    headers: [(&'static str, String); 2],
) -> Response {
    (translated.status, headers, Json(translated.body)).into_response()
}

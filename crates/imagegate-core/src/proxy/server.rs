use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use imagegate_types::{ConfigError, TranslatorConfig};
use std::sync::Arc;
use url::Url;

use crate::proxy::handlers;
use crate::proxy::upstream::client::UpstreamClient;

/// Upstream endpoint and credential configured on the server.
///
/// Both are optional: a server with neither still serves `/proxy` for callers
/// that bring their own.
#[derive(Clone, Default)]
pub struct UpstreamDefaults {
    pub target_url: Option<Url>,
    pub api_key: Option<String>,
}

impl UpstreamDefaults {
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, ConfigError> {
        let target_url = config
            .target_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| ConfigError::ParseError { message: format!("TARGET_URL: {}", e) })?;

        Ok(Self { target_url, api_key: config.api_key.clone() })
    }
}

/// Axum application state. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub defaults: Arc<UpstreamDefaults>,
}

impl AppState {
    /// Accepts a pre-built `reqwest::Client` so TLS setup happens once, outside
    /// request handling.
    pub fn new(http_client: reqwest::Client, config: &TranslatorConfig) -> Result<Self, ConfigError> {
        let defaults = UpstreamDefaults::from_config(config)?;
        let upstream = UpstreamClient::new(http_client, config.request_timeout_duration());

        Ok(Self { upstream: Arc::new(upstream), defaults: Arc::new(defaults) })
    }
}

/// Translator routes. CORS and tracing layers are applied by the server.
pub fn build_proxy_router(state: AppState) -> Router<()> {
    Router::new()
        .route(handlers::ROUTE_ENDPOINTS, get(handlers::handle_list_endpoints))
        .route(handlers::ROUTE_GENERATE, post(handlers::handle_generate))
        .route(handlers::ROUTE_IMAGES, post(handlers::handle_images_generations))
        .route(handlers::ROUTE_IMAGES_OPENAI, post(handlers::handle_images_generations))
        .route(handlers::ROUTE_PROXY, post(handlers::handle_proxy))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}

use axum::Json;
use imagegate_types::protocol::{EndpointCatalog, EndpointInfo};

use super::{ROUTE_GENERATE, ROUTE_IMAGES, ROUTE_IMAGES_OPENAI, ROUTE_PROXY};

/// Routes this translator serves, as advertised by `GET /api/endpoints`.
pub fn endpoint_catalog() -> EndpointCatalog {
    EndpointCatalog {
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            EndpointInfo::new(
                ROUTE_GENERATE,
                "POST",
                "gemini",
                "Standard Gemini-format generation",
            ),
            EndpointInfo::new(ROUTE_IMAGES, "POST", "openai", "OpenAI-compatible format"),
            EndpointInfo::new(
                ROUTE_IMAGES_OPENAI,
                "POST",
                "openai",
                "OpenAI-compatible format (OpenAI SDK base path)",
            ),
            EndpointInfo::new(ROUTE_PROXY, "POST", "custom", "Custom upstream endpoint proxy"),
        ],
    }
}

pub async fn handle_list_endpoints() -> Json<EndpointCatalog> {
    Json(endpoint_catalog())
}

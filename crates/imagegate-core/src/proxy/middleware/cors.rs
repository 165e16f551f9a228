// CORS middleware
use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::proxy::handlers::{HEADER_API_FORMAT, HEADER_FINAL_DESTINATION, HEADER_OPENAI_MODE};

/// Diagnostic headers browsers are allowed to read.
pub const EXPOSED_HEADERS: [&str; 3] =
    [HEADER_FINAL_DESTINATION, HEADER_API_FORMAT, HEADER_OPENAI_MODE];

/// create CORS layer
///
/// The translator is meant to be called from arbitrary browser pages, so any
/// origin is accepted. No credentials are involved.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(EXPOSED_HEADERS.map(HeaderName::from_static))
        .max_age(std::time::Duration::from_secs(86400))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_creation() {
        let _layer = cors_layer();
        // Layer creation succeeded - type system ensures correctness
    }
}

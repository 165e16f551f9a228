//! # imagegate Core
//!
//! Request translation for image generation.
//!
//! ```text
//! imagegate-core/src/proxy/
//! ├── mappers/      # request adapter, response extractor, response formatter
//! ├── upstream/     # single-shot upstream caller and endpoint credential handling
//! ├── handlers/     # axum handlers for generate, images, proxy, endpoints
//! ├── common/       # HTTP client builder, JSON error envelope
//! ├── middleware/   # CORS
//! └── server.rs     # AppState and proxy router
//! ```

#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::float_cmp, clippy::assertions_on_result_states)
)]

pub mod proxy;

pub use proxy::mappers::{extract_image, format_response, ExtractedImage, NormalizedResponse};
pub use proxy::server::{build_proxy_router, AppState};

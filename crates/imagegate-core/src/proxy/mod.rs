//! Proxy module - image generation request translator
//!
//! - Gemini-style and OpenAI images request shapes
//! - Per-request upstream override on `/proxy`
//! - Inline-data and Markdown data-URI response extraction

pub mod common;
pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod server;
pub mod upstream;

pub use server::{build_proxy_router, AppState, UpstreamDefaults};
pub use upstream::client::{UpstreamClient, UpstreamReply};

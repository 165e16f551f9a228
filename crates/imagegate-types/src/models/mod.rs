//! Domain models for imagegate.

pub mod config;
pub mod request;

pub use config::TranslatorConfig;
pub use request::{GenerationRequest, OutputMode, DEFAULT_MIME_TYPE, DEFAULT_TEMPERATURE};

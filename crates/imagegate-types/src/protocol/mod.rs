//! Wire types for the upstream provider and the caller-facing formats.

pub mod catalog;
pub mod gemini;
pub mod openai;

pub use catalog::{EndpointCatalog, EndpointInfo};
pub use gemini::{GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiRole, GeminiTextPart};
pub use openai::{ImageDatum, ImagesResponse};

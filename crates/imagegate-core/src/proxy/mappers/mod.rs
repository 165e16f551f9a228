// Mappers - request adapter and response normalization

pub mod extract;
pub mod format;
pub mod request;

pub use extract::{extract_image, ExtractedImage, ResponsePart};
pub use format::{format_response, format_response_at, NormalizedResponse};
pub use request::build_upstream_request;

// Handlers module - API endpoint handlers

pub mod common;
pub mod endpoints;
pub mod generate;
pub mod images;
pub mod proxy;

pub use endpoints::{endpoint_catalog, handle_list_endpoints};
pub use generate::handle_generate;
pub use images::handle_images_generations;
pub use proxy::handle_proxy;

pub const ROUTE_ENDPOINTS: &str = "/api/endpoints";
pub const ROUTE_GENERATE: &str = "/api/generate";
pub const ROUTE_IMAGES: &str = "/api/v1/images/generations";
pub const ROUTE_IMAGES_OPENAI: &str = "/v1/images/generations";
pub const ROUTE_PROXY: &str = "/proxy";

pub const HEADER_FINAL_DESTINATION: &str = "x-final-destination";
pub const HEADER_API_FORMAT: &str = "x-api-format";
pub const HEADER_OPENAI_MODE: &str = "x-openai-mode";

// Common utilities shared by handlers and server setup

pub mod client_builder;
pub mod error_response;

pub use error_response::ApiError;

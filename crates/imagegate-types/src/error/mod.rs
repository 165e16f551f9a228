//! Typed error definitions for imagegate.
//!
//! - `ProxyError` covers a single translated request and maps to the HTTP
//!   error envelope.
//! - `ConfigError` covers startup configuration.

mod config;
mod proxy;

pub use config::ConfigError;
pub use proxy::ProxyError;

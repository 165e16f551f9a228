//! Upstream module - single-shot client for the image-generation provider

pub mod client;
pub mod endpoint;

//! # imagegate Types
//!
//! Core types, models, and error definitions for imagegate.
//!
//! - **`error`** - Typed error hierarchy for request handling and configuration
//! - **`models`** - Translator configuration and request models
//! - **`protocol`** - Gemini-style upstream and OpenAI images wire types
//!
//! ## Architecture Role
//!
//! ```text
//!         imagegate-types (this crate)
//!                 │
//!                 ▼
//!          imagegate-core
//!                 │
//!                 ▼
//!         imagegate-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{ConfigError, ProxyError};

// Re-export core model types
pub use models::{GenerationRequest, OutputMode, TranslatorConfig};

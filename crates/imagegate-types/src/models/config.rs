//! Translator configuration model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use validator::Validate;

use crate::error::ConfigError;

/// Server configuration, assembled once at startup and passed explicitly
/// into the proxy state.
#[derive(Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct TranslatorConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,

    /// Default upstream endpoint for the generate and images routes.
    #[serde(default)]
    #[validate(url(message = "must be an absolute URL"))]
    pub target_url: Option<String>,

    /// Default upstream credential, sent as the `key` query parameter.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Upstream timeout in seconds. `0` disables the bound.
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,

    /// Directory served for unmatched GET paths.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_timeout() -> u64 {
    25
}

fn default_static_dir() -> String {
    "./public".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            target_url: None,
            api_key: None,
            request_timeout: default_timeout(),
            static_dir: default_static_dir(),
        }
    }
}

impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("target_url", &self.target_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("request_timeout", &self.request_timeout)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl TranslatorConfig {
    /// Normalize empty strings to `None` and run field validation.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.target_url = self.target_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        self.api_key = self.api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());

        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
        Ok(self)
    }

    /// `None` means the upstream call is unbounded.
    pub fn request_timeout_duration(&self) -> Option<Duration> {
        (self.request_timeout > 0).then(|| Duration::from_secs(self.request_timeout))
    }

    pub fn get_bind_address(&self) -> &str {
        &self.host
    }
}

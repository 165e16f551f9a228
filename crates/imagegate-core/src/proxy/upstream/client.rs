use imagegate_types::protocol::GeminiRequest;
use imagegate_types::ProxyError;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

use super::endpoint::{redact_credential, with_credential};

/// Successful upstream answer: a 2xx status and its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// One POST per translated request. No retries, no fallbacks.
pub struct UpstreamClient {
    http_client: Client,
    timeout: Option<Duration>,
}

impl UpstreamClient {
    /// Create a new UpstreamClient with the given HTTP client.
    ///
    /// `timeout` bounds the whole exchange (connect, send, body read);
    /// `None` waits indefinitely.
    pub fn new(http_client: Client, timeout: Option<Duration>) -> Self {
        Self { http_client, timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// POST `request` to `endpoint` with `credential` as the `key` parameter.
    ///
    /// On timeout the in-flight request future is dropped, which aborts the
    /// connection.
    pub async fn call(
        &self,
        request: &GeminiRequest,
        endpoint: &Url,
        credential: &str,
    ) -> Result<UpstreamReply, ProxyError> {
        let destination = redact_credential(endpoint);
        let started = Instant::now();
        tracing::debug!("[Upstream] POST {}", destination);

        let exchange = self.exchange(with_credential(endpoint, credential), request);
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, exchange).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        "[Upstream] {} timed out after {}s",
                        destination,
                        limit.as_secs()
                    );
                    return Err(ProxyError::Timeout { duration_secs: limit.as_secs() });
                },
            },
            None => exchange.await,
        };

        match &result {
            Ok(reply) => tracing::info!(
                "[Upstream] {} answered HTTP {} in {}ms",
                destination,
                reply.status,
                started.elapsed().as_millis()
            ),
            Err(ProxyError::Upstream { status, body }) => {
                tracing::warn!("[Upstream] {} returned HTTP {}: {:.200}", destination, status, body)
            },
            Err(e) => tracing::error!("[Upstream] {} failed: {}", destination, e),
        }

        result
    }

    async fn exchange(
        &self,
        url: Url,
        request: &GeminiRequest,
    ) -> Result<UpstreamReply, ProxyError> {
        let response =
            self.http_client.post(url).json(request).send().await.map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(ProxyError::Upstream { status: status.as_u16(), body: text });
        }

        let body = serde_json::from_str(&text)
            .map_err(|e| ProxyError::MalformedUpstreamResponse { message: e.to_string() })?;

        Ok(UpstreamReply { status: status.as_u16(), body })
    }
}

/// reqwest errors embed the request URL, which carries the credential.
fn transport_error(e: reqwest::Error) -> ProxyError {
    ProxyError::Network { message: e.without_url().to_string() }
}

use std::time::Duration;

/// Build the shared upstream HTTP client.
///
/// Only the connect phase is bounded here; the overall request bound is
/// applied per call by `UpstreamClient`.
pub fn build_http_client(connect_timeout_secs: u64) -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs.max(1)))
        .tcp_nodelay(true)
        .user_agent(concat!("imagegate/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

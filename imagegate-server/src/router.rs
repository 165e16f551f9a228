use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use imagegate_core::proxy::middleware::cors::cors_layer;
use imagegate_core::proxy::{build_proxy_router, AppState};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info));

    let index_path = format!("{}/index.html", static_dir);
    let spa_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(&index_path));

    // Static fallback sits at the top level so unmatched GETs never reach the
    // translator handlers. CORS wraps everything, including 404s and the UI.
    public_routes
        .merge(build_proxy_router(state))
        .fallback_service(spa_service)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue, Method};
    use axum_test::TestServer;
    use imagegate_core::proxy::common::client_builder::build_http_client;
    use imagegate_types::TranslatorConfig;

    fn test_server(static_dir: &str) -> TestServer {
        let config = TranslatorConfig::default();
        let state = AppState::new(build_http_client(5).unwrap(), &config).unwrap();
        TestServer::new(build_router(state, static_dir)).unwrap()
    }

    #[tokio::test]
    async fn test_health_routes() {
        let server = test_server("./does-not-exist");

        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            response.assert_json(&serde_json::json!({"status": "ok"}));
        }
    }

    #[tokio::test]
    async fn test_version_reports_cargo_version() {
        let server = test_server("./does-not-exist");
        let body: serde_json::Value = server.get("/version").await.json();
        assert_eq!(body["cargo_version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_cors_preflight_on_generate() {
        let server = test_server("./does-not-exist");

        let response = server
            .method(Method::OPTIONS, "/api/generate")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://app.example"),
            )
            .add_header(
                HeaderName::from_static("access-control-request-method"),
                HeaderValue::from_static("POST"),
            )
            .add_header(
                HeaderName::from_static("access-control-request-headers"),
                HeaderValue::from_static("content-type"),
            )
            .await;

        response.assert_status_ok();
        let headers = response.headers();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(headers.get("access-control-max-age").unwrap(), "86400");
        let methods = headers.get("access-control-allow-methods").unwrap().to_str().unwrap();
        assert!(methods.contains("POST"));
    }

    #[tokio::test]
    async fn test_cors_exposes_diagnostic_headers() {
        let server = test_server("./does-not-exist");

        let response = server
            .get("/api/endpoints")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://app.example"),
            )
            .await;

        response.assert_status_ok();
        let exposed = response
            .headers()
            .get("access-control-expose-headers")
            .unwrap()
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(exposed.contains("x-final-destination"));
        assert!(exposed.contains("x-api-format"));
        assert!(exposed.contains("x-openai-mode"));
    }

    #[tokio::test]
    async fn test_error_responses_carry_cors() {
        let server = test_server("./does-not-exist");

        let response = server
            .post("/api/generate")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("https://app.example"),
            )
            .json(&serde_json::json!({"prompt": "a cat"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
    }

    #[tokio::test]
    async fn test_unmatched_get_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>imagegate</h1>").unwrap();
        let server = test_server(dir.path().to_str().unwrap());

        let root = server.get("/").await;
        root.assert_status_ok();
        assert!(root.text().contains("imagegate"));

        let deep = server.get("/playground/settings").await;
        deep.assert_status_ok();
        assert!(deep.text().contains("imagegate"));
    }
}

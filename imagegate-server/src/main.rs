//! imagegate Server - Headless Daemon
//!
//! Translates simple image-generation requests into Gemini-style
//! `generateContent` calls and returns either the upstream payload or an
//! OpenAI images-API response.
//!
//! Access via: http://localhost:8787

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod commands;
mod router;
mod server_utils;

use cli::{Cli, Commands};
use imagegate_core::proxy::common::client_builder::build_http_client;
use imagegate_core::proxy::upstream::endpoint::redact_credential;
use imagegate_core::proxy::AppState;
use imagegate_types::TranslatorConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli
        .server
        .into_config()
        .validated()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::Routes { json } => commands::list_routes(json),
        Commands::Config { json } => commands::show_config(&config, json),
    }
}

async fn run_server(config: TranslatorConfig) -> Result<()> {
    info!("🚀 imagegate starting on {}:{}...", config.host, config.port);

    let http_client = build_http_client(CONNECT_TIMEOUT_SECS).map_err(|e| anyhow!(e))?;
    let state = AppState::new(http_client, &config)?;

    match &state.defaults.target_url {
        Some(url) => info!("🎯 Default upstream: {}", redact_credential(url)),
        None => warn!("⚠️ TARGET_URL not set, only /proxy with a caller-supplied target_url will work"),
    }
    if state.defaults.api_key.is_none() {
        warn!("⚠️ API_KEY not set, only /proxy with a caller-supplied key will work");
    }
    match config.request_timeout_duration() {
        Some(limit) => info!("⏱️ Upstream timeout: {}s", limit.as_secs()),
        None => info!("⏱️ Upstream timeout: unbounded"),
    }

    let app = router::build_router(state, &config.static_dir);
    info!("📁 Static files: {}", config.static_dir);

    let listener = server_utils::create_listener(&config)?;
    info!("🌐 Server listening on http://{}", listener.local_addr()?);
    info!("✅ Ready: POST /api/generate, /api/v1/images/generations, /proxy");

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

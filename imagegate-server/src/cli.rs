use clap::{Args, Parser, Subcommand};
use imagegate_types::TranslatorConfig;

#[derive(Parser)]
#[command(
    name = "imagegate",
    about = "imagegate - image generation request translator",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub server: ServerArgs,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Args, Clone, Debug)]
pub struct ServerArgs {
    #[arg(long, env = "IMAGEGATE_HOST", default_value = "127.0.0.1", help = "Address to bind to")]
    pub host: String,

    #[arg(short, long, env = "IMAGEGATE_PORT", default_value = "8787")]
    pub port: u16,

    #[arg(long, env = "TARGET_URL", help = "Default upstream generation endpoint")]
    pub target_url: Option<String>,

    #[arg(long, env = "API_KEY", hide_env_values = true, help = "Default upstream API key")]
    pub api_key: Option<String>,

    #[arg(
        long,
        env = "IMAGEGATE_TIMEOUT_SECS",
        default_value = "25",
        help = "Upstream timeout in seconds (0 disables)"
    )]
    pub timeout: u64,

    #[arg(long, env = "IMAGEGATE_STATIC_DIR", default_value = "./public")]
    pub static_dir: String,
}

impl ServerArgs {
    pub fn into_config(self) -> TranslatorConfig {
        TranslatorConfig {
            host: self.host,
            port: self.port,
            target_url: self.target_url,
            api_key: self.api_key,
            request_timeout: self.timeout,
            static_dir: self.static_dir,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the translator server (default if no command specified)")]
    Serve,

    #[command(about = "List the routes the server exposes")]
    Routes {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Show the effective configuration")]
    Config {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

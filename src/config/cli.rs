use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command-line flags. Unset options fall through to the config file and
/// then to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "delivery-pricing")]
#[command(about = "Delivery order price calculator service")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Socket address to listen on [default: 127.0.0.1:8000]")]
    pub bind_address: Option<String>,

    #[arg(long, help = "API version segment of the endpoint path [default: v1]")]
    pub api_version: Option<String>,

    #[arg(long, help = "Base URL of the venue API")]
    pub upstream_base_url: Option<String>,

    #[arg(long, help = "Upstream request timeout in seconds [default: 10]")]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long, value_delimiter = ',', help = "Comma-separated venue slugs to accept")]
    pub known_venues: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

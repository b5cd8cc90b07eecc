pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::domain::venue::{VenueRegistry, DEFAULT_VENUES};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_socket_addr, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

pub use cli::CliConfig;
pub use toml_config::FileConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_UPSTREAM_BASE_URL: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1/venues";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Fully resolved service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub api_version: String,
    pub upstream_base_url: String,
    pub request_timeout_seconds: u64,
    pub known_venues: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            known_venues: DEFAULT_VENUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ServiceConfig {
    /// CLI flags win over the file, the file wins over defaults.
    pub fn resolve(cli: &CliConfig, file: &FileConfig) -> Self {
        let defaults = Self::default();

        let known_venues = if !cli.known_venues.is_empty() {
            cli.known_venues.clone()
        } else if let Some(known) = file.known_venues() {
            known.to_vec()
        } else {
            defaults.known_venues
        };

        Self {
            bind_address: cli
                .bind_address
                .clone()
                .or_else(|| file.bind_address().map(str::to_string))
                .unwrap_or(defaults.bind_address),
            api_version: cli
                .api_version
                .clone()
                .or_else(|| file.api_version().map(str::to_string))
                .unwrap_or(defaults.api_version),
            upstream_base_url: cli
                .upstream_base_url
                .clone()
                .or_else(|| file.upstream_base_url().map(str::to_string))
                .unwrap_or(defaults.upstream_base_url),
            request_timeout_seconds: cli
                .request_timeout_seconds
                .or_else(|| file.timeout_seconds())
                .unwrap_or(defaults.request_timeout_seconds),
            known_venues,
        }
    }

    /// Reads the file named by `--config`, if any, and resolves against it.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration file: {}", path);
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::resolve(cli, &file))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind_address", &self.bind_address).map_err(into_config)
    }

    pub fn registry(&self) -> VenueRegistry {
        VenueRegistry::new(self.known_venues.iter().cloned())
    }

    fn validate_config(&self) -> Result<()> {
        validate_socket_addr("server.bind_address", &self.bind_address)?;
        validate_non_empty_string("server.api_version", &self.api_version)?;
        if self.api_version.contains('/') {
            return Err(PricingError::validation(
                "server.api_version",
                "Value must be a single path segment",
            ));
        }
        validate_url("upstream.base_url", &self.upstream_base_url)?;
        validate_positive_number("upstream.timeout_seconds", self.request_timeout_seconds, 1)?;

        if self.known_venues.is_empty() {
            return Err(PricingError::validation(
                "venues.known",
                "At least one venue slug is required",
            ));
        }
        for slug in &self.known_venues {
            validate_non_empty_string("venues.known", slug)?;
        }
        Ok(())
    }
}

fn into_config(err: PricingError) -> PricingError {
    PricingError::Config {
        message: err.to_string(),
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config().map_err(into_config)
    }
}

impl ConfigProvider for ServiceConfig {
    fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

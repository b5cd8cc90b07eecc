use anyhow::Context;
use clap::Parser;
use delivery_pricing::adapters::server;
use delivery_pricing::utils::{logger, validation::Validate};
use delivery_pricing::{CliConfig, DeliveryPriceService, ServiceConfig, VenueApiClient};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting delivery-pricing");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ServiceConfig::load(&cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    let client = VenueApiClient::new(&config).context("failed to build venue API client")?;
    let service = DeliveryPriceService::new(client, config.registry());
    tracing::info!(
        "Known venues: {}",
        service.registry().iter().collect::<Vec<_>>().join(", ")
    );
    let app = server::router(service, &config.api_version);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("Serving {}", server::price_path(&config.api_version));

    server::serve(listener, app, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

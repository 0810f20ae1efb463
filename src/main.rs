//! compliance-dashboard - HTTP Server Entry Point
//!
//! Starts the HTTP server that serves the dashboard and its API.

use compliance_dashboard::{api, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Every store mutation runs to completion before the next request is
    // handled; a current-thread runtime keeps it that way.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compliance_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: addr={}, dev_mode={}",
        config.bind_addr(),
        config.dev_mode
    );

    api::serve(config).await?;

    Ok(())
}

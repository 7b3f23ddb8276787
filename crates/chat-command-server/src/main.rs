//! Chat Command Server - Entry point.

use anyhow::Context;
use chat_command_server::{
    api::{create_router, AppState},
    config::{Config, LogConfig, LogFormat},
};
use recharge_plans_client::RechargePlansClient;
use secrecy::ExposeSecret;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log);

    info!("Starting Chat Command Server");

    let plans = RechargePlansClient::new(
        config.plans.api_key.expose_secret(),
        &config.plans.base_url,
        config.plans.timeout,
    )
    .context("Failed to create recharge plans client")?;

    info!(
        base_url = %plans.base_url(),
        timeout = ?config.plans.timeout,
        "Recharge plans client ready"
    );

    let state = AppState::new(plans, config.server.homepage_url.as_str());
    let app = create_router(state);

    let ip = config.server.listen_addr.parse::<IpAddr>().unwrap_or_else(|_| {
        warn!(listen_addr = %config.server.listen_addr, "Invalid listen address, using 0.0.0.0");
        IpAddr::from([0, 0, 0, 0])
    });
    let addr = SocketAddr::new(ip, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

fn init_logging(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    match log.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

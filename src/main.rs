use anyhow::Context;
use disaster_desk::{
    app::create_router,
    app_state::AppState,
    config, db,
    modules::reports::ReportService,
    telemetry::{init_telemetry, TelemetryConfig},
};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = config::init().context("Failed to load configuration")?;

    let telemetry = init_telemetry(Some(TelemetryConfig {
        environment: config.app.environment.as_str().to_string(),
        ..TelemetryConfig::default()
    }))
    .await?;

    let store = db::init_store(&config.storage.data_file);
    let reports = Arc::new(ReportService::new(store));
    let state = AppState::new(reports, config.clone());
    let app = create_router(state);

    let addr = config.server_addr();
    info!("{} listening on {}", config.app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve application")?;

    if let Err(e) = telemetry.shutdown().await {
        warn!("Telemetry shutdown failed: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

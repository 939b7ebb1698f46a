use clap::Parser;
use supplement_store::config::ServerConfig;
use supplement_store::http::{self, AppState};
use supplement_store::lifecycle::tracing::setup_tracing;
use supplement_store::lifecycle::StoreSystem;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::parse();
    setup_tracing(config.verbose);

    info!(?config, "Starting supplement store");

    let system = StoreSystem::new(config.channel_capacity);

    if config.skip_seed {
        info!("Seeding skipped");
    } else {
        let report = system.seed().await.map_err(|e| e.to_string())?;
        info!(
            brands = report.brands_inserted,
            supplements = report.supplements_inserted,
            skipped = report.supplements_skipped,
            "Seeding complete"
        );
    }

    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("failed to bind {}: {}", config.bind, e))?;

    let state = AppState::new(&system);
    http::serve(state, listener, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
        }
        info!("Shutdown signal received");
    })
    .await
    .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Server stopped");
    Ok(())
}

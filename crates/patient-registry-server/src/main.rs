use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use patient_registry_core::{JsonFileStore, PatientRegistry};
use patient_registry_server::{router, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        data = %config.data_path.display(),
        "starting patient registry"
    );

    let store = JsonFileStore::new(&config.data_path);
    let app = router(PatientRegistry::new(store));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
}

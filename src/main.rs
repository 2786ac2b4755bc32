//! Server entry point: init tracing, open the store, serve the router.

use roster::{app, AppState, CharacterStore, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=info".parse()?))
        .init();

    let config = Config::from_env();
    let store = CharacterStore::connect(&config.database_path).await?;
    store.init().await?;
    tracing::info!(path = %config.database_path, "database ready");

    let state = AppState {
        store: store.clone(),
    };
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

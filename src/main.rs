use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ipl_stats_api::config::Settings;
use ipl_stats_api::data::DataStore;
use ipl_stats_api::{app, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    let settings = Settings::from_env();

    tracing::info!("Loading data from: {}", settings.data_dir.display());
    let store = DataStore::load(&settings.data_dir);

    let addr = SocketAddr::from((settings.host, settings.port));
    let state = Arc::new(AppState { settings, store });

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}

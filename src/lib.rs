use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod data;
pub mod error;
pub mod insights;
pub mod lookup;
pub mod models;
pub mod reference;
pub mod routes;

use config::Settings;
use data::DataStore;

/// Read-only shared state: settings plus the tables loaded at startup.
pub struct AppState {
    pub settings: Settings,
    pub store: DataStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for the dashboard frontend
    let cors = CorsLayer::new()
        .allow_origin(Any) // In production, use specific origins
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and diagnostics
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/debug", get(routes::health::debug_info))
        .route("/config", get(routes::health::get_config))

        // Directory endpoints
        .route("/teams", get(routes::teams::get_teams))
        .route("/teams/{team_name}/players", get(routes::teams::get_team_players))
        .route("/venues", get(routes::venues::get_venues))

        // Insight endpoints
        .route("/player/{player_name}/insights", get(routes::players::get_player_insights))
        .route("/team/{team_name}/insights", get(routes::teams::get_team_insights))
        .route("/venue/{venue_name}/insights", get(routes::venues::get_venue_insights))

        // Scatter-plot endpoints
        .route("/scatter-plot-data", get(routes::scatter::get_scatter_plot_data))
        .route("/team-scatter-plot-data", get(routes::scatter::get_team_scatter_plot_data))

        // Bowling matchup endpoints
        .route("/player/{player_name}/bowling-stats", get(routes::players::get_player_bowling_stats))
        .route("/team/{team_name}/bowling-stats", get(routes::teams::get_team_bowling_stats))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

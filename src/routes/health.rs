use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct ApiInfo {
    message: String,
    status: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
    timestamp: i64,
}

#[derive(Serialize)]
pub struct DataLoadedFlags {
    batting_data: bool,
    team_data: bool,
    batter_vs_bowler_data: bool,
    team_vs_bowler_data: bool,
    venue_data: bool,
}

#[derive(Serialize)]
pub struct DebugResponse {
    status: String,
    environment: String,
    host: String,
    port: u16,
    data_loaded: DataLoadedFlags,
    data_dir_exists: bool,
    version: String,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    api_url: String,
    environment: String,
    version: String,
}

// GET / - Root banner
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "IPL Opposition Planning API is running!".to_string(),
        status: "healthy".to_string(),
    })
}

// GET /health - Liveness check
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}

// GET /debug - Deployment diagnostics
pub async fn debug_info(State(state): State<Arc<AppState>>) -> Json<DebugResponse> {
    Json(DebugResponse {
        status: "running".to_string(),
        environment: state.settings.environment.clone(),
        host: state.settings.host.to_string(),
        port: state.settings.port,
        data_loaded: DataLoadedFlags {
            batting_data: state.store.batting.is_some(),
            team_data: state.store.team_batting.is_some(),
            batter_vs_bowler_data: state.store.batter_vs_bowler.is_some(),
            team_vs_bowler_data: state.store.team_vs_bowler.is_some(),
            venue_data: state.store.venues.is_some(),
        },
        data_dir_exists: state.settings.data_dir.exists(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// GET /config - API configuration
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        api_url: state.settings.api_url(),
        environment: state.settings.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

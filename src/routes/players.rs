use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::insights;
use crate::lookup;
use crate::models::{PlayerBowlingStatsResponse, PlayerInsightsResponse};
use crate::reference;
use crate::AppState;

// GET /player/{player_name}/insights - Insights for a specific player
pub async fn get_player_insights(Path(player_name): Path<String>) -> Json<PlayerInsightsResponse> {
    // Players outside the curated set get a synthesized bundle.
    let insights = insights::player_insights(&player_name)
        .unwrap_or_else(|| insights::default_player_insights(&player_name));

    Json(PlayerInsightsResponse {
        player: player_name,
        insights,
    })
}

// GET /player/{player_name}/bowling-stats - Player strike rate by bowler type
pub async fn get_player_bowling_stats(
    State(state): State<Arc<AppState>>,
    Path(player_name): Path<String>,
) -> Json<PlayerBowlingStatsResponse> {
    let bowling_stats = lookup::matchup_profile(
        state.store.batter_vs_bowler.as_ref(),
        "Batter_Name",
        &player_name,
        "bowler.type",
        "StrikeRate",
        &reference::PLAYER_BOWLING_DEFAULTS,
    );

    Json(PlayerBowlingStatsResponse {
        player: player_name,
        bowling_stats,
        overall_averages: reference::profile_map(&reference::PLAYER_BOWLING_OVERALL),
    })
}

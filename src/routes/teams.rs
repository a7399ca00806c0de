use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::insights;
use crate::lookup;
use crate::models::{
    TeamBowlingStatsResponse, TeamInsightsResponse, TeamListResponse, TeamPlayersResponse,
};
use crate::reference;
use crate::AppState;

// GET /teams - List all IPL teams
pub async fn get_teams() -> Json<TeamListResponse> {
    Json(TeamListResponse {
        teams: reference::team_names(),
    })
}

// GET /teams/{team_name}/players - Roster for a specific team
pub async fn get_team_players(
    Path(team_name): Path<String>,
) -> Result<Json<TeamPlayersResponse>, ApiError> {
    let players = reference::team_players(&team_name).ok_or(ApiError::NotFound("Team not found"))?;

    Ok(Json(TeamPlayersResponse {
        team: team_name,
        players: players.iter().map(|p| p.to_string()).collect(),
    }))
}

// GET /team/{team_name}/insights - Insights for a specific team
pub async fn get_team_insights(
    Path(team_name): Path<String>,
) -> Result<Json<TeamInsightsResponse>, ApiError> {
    let insights =
        insights::team_insights(&team_name).ok_or(ApiError::NotFound("Team insights not found"))?;

    Ok(Json(TeamInsightsResponse {
        team: team_name,
        insights,
    }))
}

// GET /team/{team_name}/bowling-stats - Team strike rate by bowler type
pub async fn get_team_bowling_stats(
    State(state): State<Arc<AppState>>,
    Path(team_name): Path<String>,
) -> Json<TeamBowlingStatsResponse> {
    let bowling_stats = lookup::matchup_profile(
        state.store.team_vs_bowler.as_ref(),
        "batting_team",
        &team_name,
        "bowling_type",
        "strike_rate",
        &reference::TEAM_BOWLING_DEFAULTS,
    );

    Json(TeamBowlingStatsResponse {
        team: team_name,
        bowling_stats,
        overall_averages: reference::profile_map(&reference::TEAM_BOWLING_OVERALL),
    })
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::lookup;
use crate::models::{ScatterPoint, ScatterResponse, TeamScatterResponse};
use crate::reference::TEAM_SCATTER;
use crate::AppState;

#[derive(Deserialize)]
pub struct ScatterQuery {
    #[serde(default)]
    selected_players: String,
}

// GET /scatter-plot-data?selected_players=a,b - Scatter dataset for players
pub async fn get_scatter_plot_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterQuery>,
) -> Json<ScatterResponse> {
    let selected = lookup::parse_selected(&params.selected_players);
    let scatter_data = lookup::scatter_points(state.store.batting.as_ref(), &selected);

    Json(ScatterResponse { scatter_data })
}

// GET /team-scatter-plot-data - Static per-team scatter dataset
pub async fn get_team_scatter_plot_data() -> Json<TeamScatterResponse> {
    let team_scatter_data = TEAM_SCATTER
        .iter()
        .map(|&(name, first_avg, second_avg, first_sr, second_sr)| ScatterPoint {
            name: name.to_string(),
            first_innings_avg: first_avg,
            second_innings_avg: second_avg,
            first_innings_sr: first_sr,
            second_innings_sr: second_sr,
            is_selected: None,
        })
        .collect();

    Json(TeamScatterResponse { team_scatter_data })
}

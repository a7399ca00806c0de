use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub teams: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamPlayersResponse {
    pub team: String,
    pub players: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VenueListResponse {
    pub venues: Vec<String>,
}

/// Narrative insight bundle for a player or team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightBundle {
    pub ai_insights: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

/// Venue bundles carry a single flat list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueInsightBundle {
    pub insights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerInsightsResponse {
    pub player: String,
    pub insights: InsightBundle,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamInsightsResponse {
    pub team: String,
    pub insights: InsightBundle,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VenueInsightsResponse {
    pub venue: String,
    pub insights: VenueInsightBundle,
}

/// One scatter-plot record. `isSelected` is only emitted on the
/// table-backed path; the fallback path leaves it unset and the field is
/// skipped on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub name: String,
    pub first_innings_avg: f64,
    pub second_innings_avg: f64,
    pub first_innings_sr: f64,
    pub second_innings_sr: f64,
    #[serde(rename = "isSelected", skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScatterResponse {
    pub scatter_data: Vec<ScatterPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamScatterResponse {
    pub team_scatter_data: Vec<ScatterPoint>,
}

/// Strike rate by bowler type, plus the league-wide baseline profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerBowlingStatsResponse {
    pub player: String,
    pub bowling_stats: BTreeMap<String, f64>,
    pub overall_averages: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamBowlingStatsResponse {
    pub team: String,
    pub bowling_stats: BTreeMap<String, f64>,
    pub overall_averages: BTreeMap<String, f64>,
}

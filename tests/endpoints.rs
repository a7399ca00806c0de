use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ipl_stats_api::config::Settings;
use ipl_stats_api::data::DataStore;
use ipl_stats_api::{app, AppState};

fn fixture_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

fn settings_for(data_dir: PathBuf) -> Settings {
    Settings {
        environment: "test".to_string(),
        host: std::net::Ipv4Addr::LOCALHOST,
        port: 8000,
        data_dir,
    }
}

/// App with no tables loaded; every lookup takes the fallback path.
fn empty_app() -> Router {
    let state = AppState {
        settings: settings_for(PathBuf::from("/nonexistent")),
        store: DataStore::empty(),
    };
    app(Arc::new(state))
}

/// App backed by the CSV fixtures under tests/fixtures.
fn fixture_app() -> Router {
    let dir = fixture_dir();
    let state = AppState {
        settings: settings_for(dir.clone()),
        store: DataStore::load(&dir),
    };
    app(Arc::new(state))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get_raw(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_reports_healthy() {
    let (status, body) = get(empty_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "IPL Opposition Planning API is running!");
}

#[tokio::test]
async fn health_check_responds() {
    let (status, body) = get(empty_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "API is running");
    assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn teams_lists_franchises_in_declared_order() {
    let (status, body) = get(empty_app(), "/teams").await;
    assert_eq!(status, StatusCode::OK);
    let teams = body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 10);
    assert_eq!(teams[0], "Chennai Super Kings");
    assert_eq!(teams[1], "Mumbai Indians");
    assert_eq!(teams[9], "Lucknow Super Giants");
}

#[tokio::test]
async fn team_players_returns_roster() {
    let (status, body) = get(empty_app(), "/teams/Chennai%20Super%20Kings/players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team"], "Chennai Super Kings");
    let players = body["players"].as_array().unwrap();
    assert!(!players.is_empty());
    assert_eq!(players[0], "Ruturaj Gaikwad");
}

#[tokio::test]
async fn team_players_is_stable_across_calls() {
    let first = get(empty_app(), "/teams/Mumbai%20Indians/players").await;
    let second = get(empty_app(), "/teams/Mumbai%20Indians/players").await;
    assert_eq!(first.1, second.1);
}

#[tokio::test]
async fn unknown_team_roster_is_not_found() {
    let (status, body) = get(empty_app(), "/teams/Texas%20Rangers/players").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Team not found");
}

#[tokio::test]
async fn venues_lists_all_grounds() {
    let (status, body) = get(empty_app(), "/venues").await;
    assert_eq!(status, StatusCode::OK);
    let venues = body["venues"].as_array().unwrap();
    assert_eq!(venues.len(), 10);
    assert_eq!(venues[0], "M. A. Chidambaram Stadium, Chennai");
}

#[tokio::test]
async fn known_player_gets_curated_insights() {
    let (status, body) = get(empty_app(), "/player/Virat%20Kohli/insights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"], "Virat Kohli");
    let ai = body["insights"]["ai_insights"].as_array().unwrap();
    assert!(ai[0].as_str().unwrap().contains("Virat Kohli"));
    assert!(!body["insights"]["strengths"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_player_gets_synthesized_insights() {
    let (status, body) = get(empty_app(), "/player/UnknownPlayer123/insights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"], "UnknownPlayer123");
    let ai = body["insights"]["ai_insights"].as_array().unwrap();
    assert_eq!(ai.len(), 3);
    assert!(ai[0].as_str().unwrap().contains("UnknownPlayer123"));
    assert_eq!(body["insights"]["strengths"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["insights"]["areas_for_improvement"].as_array().unwrap().len(),
        2
    );
}

#[tokio::test]
async fn team_insights_resolve_for_every_franchise() {
    for team in [
        "Chennai%20Super%20Kings",
        "Rajasthan%20Royals",
        "Gujarat%20Titans",
    ] {
        let (status, body) = get(empty_app(), &format!("/team/{team}/insights")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["insights"]["ai_insights"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn unknown_team_insights_is_not_found() {
    let (status, body) = get(empty_app(), "/team/Somerset/insights").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Team insights not found");
}

#[tokio::test]
async fn unknown_venue_gets_synthesized_insights() {
    let (status, body) = get(empty_app(), "/venue/Lords/insights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["venue"], "Lords");
    let insights = body["insights"]["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 5);
    assert!(insights[0].as_str().unwrap().contains("Lords"));
}

#[tokio::test]
async fn known_venue_gets_curated_insights() {
    let (status, body) = get(empty_app(), "/venue/Wankhede%20Stadium,%20Mumbai/insights").await;
    assert_eq!(status, StatusCode::OK);
    let insights = body["insights"]["insights"].as_array().unwrap();
    assert!(!insights[0].as_str().unwrap().contains("balanced conditions"));
}

#[tokio::test]
async fn scatter_fallback_serves_seed_records_without_selection_flag() {
    let (status, raw) = get_raw(empty_app(), "/scatter-plot-data").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!raw.contains("isSelected"));

    let body: Value = serde_json::from_str(&raw).unwrap();
    let points = body["scatter_data"].as_array().unwrap();
    assert_eq!(points.len(), 15);
    assert_eq!(points[0]["name"], "Shubman Gill");
    assert_eq!(points[0]["first_innings_avg"], 45.2);
}

#[tokio::test]
async fn scatter_fallback_appends_unknown_selection_with_derived_defaults() {
    let (status, body) = get(
        empty_app(),
        "/scatter-plot-data?selected_players=Virat%20Kohli,New%20Guy",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["scatter_data"].as_array().unwrap();
    // 15 seed records plus one genuinely new name; Kohli appears once.
    assert_eq!(points.len(), 16);
    let kohli: Vec<_> = points.iter().filter(|p| p["name"] == "Virat Kohli").collect();
    assert_eq!(kohli.len(), 1);

    // "New Guy" is 7 characters.
    let new_guy = points.iter().find(|p| p["name"] == "New Guy").unwrap();
    assert_eq!(new_guy["first_innings_avg"], 42.0);
    assert_eq!(new_guy["second_innings_avg"], 37.0);
    assert_eq!(new_guy["first_innings_sr"], 142.0);
    assert_eq!(new_guy["second_innings_sr"], 137.0);
}

#[tokio::test]
async fn scatter_fallback_is_deterministic() {
    let uri = "/scatter-plot-data?selected_players=Someone%20New";
    let first = get(empty_app(), uri).await;
    let second = get(empty_app(), uri).await;
    assert_eq!(first.1, second.1);
}

#[tokio::test]
async fn table_backed_scatter_normalizes_percent_strike_rates() {
    let (status, body) = get(fixture_app(), "/scatter-plot-data").await;
    assert_eq!(status, StatusCode::OK);
    let points = body["scatter_data"].as_array().unwrap();
    // Only key players present in the fixture table; Ambati Rayudu is
    // neither key nor selected.
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p["name"] != "Ambati Rayudu"));

    let kohli = points.iter().find(|p| p["name"] == "Virat Kohli").unwrap();
    assert_eq!(kohli["first_innings_sr"], 140.2);
    assert_eq!(kohli["second_innings_sr"], 134.8);
    assert_eq!(kohli["isSelected"], false);

    // Empty cell converts to zero.
    let rohit = points.iter().find(|p| p["name"] == "Rohit Sharma").unwrap();
    assert_eq!(rohit["second_innings_avg"], 0.0);

    // Plain numeric strike rates pass through unchanged.
    let buttler = points.iter().find(|p| p["name"] == "Jos Buttler").unwrap();
    assert_eq!(buttler["first_innings_sr"], 143.6);
}

#[tokio::test]
async fn table_backed_scatter_flags_and_appends_selection() {
    let (status, body) = get(
        fixture_app(),
        "/scatter-plot-data?selected_players=Ambati%20Rayudu,New%20Guy",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["scatter_data"].as_array().unwrap();
    // Three key players from the table, Rayudu now selected, New Guy appended.
    assert_eq!(points.len(), 5);

    let rayudu = points.iter().find(|p| p["name"] == "Ambati Rayudu").unwrap();
    assert_eq!(rayudu["isSelected"], true);
    assert_eq!(rayudu["first_innings_avg"], 28.2);

    let new_guy = points.iter().find(|p| p["name"] == "New Guy").unwrap();
    assert_eq!(new_guy["isSelected"], true);
    assert_eq!(new_guy["first_innings_avg"], 42.0);
}

#[tokio::test]
async fn team_scatter_serves_static_dataset() {
    let (status, body) = get(empty_app(), "/team-scatter-plot-data").await;
    assert_eq!(status, StatusCode::OK);
    let points = body["team_scatter_data"].as_array().unwrap();
    assert_eq!(points.len(), 10);
    assert_eq!(points[0]["name"], "Chennai Super Kings");
    assert_eq!(points[0]["first_innings_avg"], 173.59);
}

#[tokio::test]
async fn player_bowling_stats_fall_back_to_default_profile() {
    let (status, body) = get(empty_app(), "/player/Virat%20Kohli/bowling-stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player"], "Virat Kohli");
    let stats = body["bowling_stats"].as_object().unwrap();
    assert_eq!(stats.len(), 6);
    assert_eq!(stats["Off spin"], 115.0);
    assert_eq!(stats["Left arm pace"], 130.0);
    let overall = body["overall_averages"].as_object().unwrap();
    assert_eq!(overall["Off spin"], 118.3);
}

#[tokio::test]
async fn player_bowling_stats_read_from_table_rows() {
    let (status, body) = get(fixture_app(), "/player/Virat%20Kohli/bowling-stats").await;
    assert_eq!(status, StatusCode::OK);
    let stats = body["bowling_stats"].as_object().unwrap();
    assert_eq!(stats.len(), 4);
    assert_eq!(stats["Off spin"], 112.5);
    // Percent-formatted strike rate is normalized.
    assert_eq!(stats["Leg spin"], 119.8);
    // Baseline profile rides along regardless of the data path.
    assert_eq!(body["overall_averages"]["Right arm pace"], 127.2);
}

#[tokio::test]
async fn unknown_player_bowling_stats_use_default_profile() {
    let (status, body) = get(fixture_app(), "/player/Nobody%20Special/bowling-stats").await;
    assert_eq!(status, StatusCode::OK);
    let stats = body["bowling_stats"].as_object().unwrap();
    assert_eq!(stats.len(), 6);
    assert_eq!(stats["Slow left arm orthodox"], 110.0);
}

#[tokio::test]
async fn team_bowling_stats_fall_back_to_default_profile() {
    let (status, body) = get(empty_app(), "/team/Chennai%20Super%20Kings/bowling-stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team"], "Chennai Super Kings");
    let stats = body["bowling_stats"].as_object().unwrap();
    assert_eq!(stats["Off spin"], 125.0);
    assert_eq!(body["overall_averages"]["Off spin"], 123.5);
}

#[tokio::test]
async fn team_bowling_stats_read_from_table_rows() {
    let (status, body) = get(fixture_app(), "/team/Chennai%20Super%20Kings/bowling-stats").await;
    assert_eq!(status, StatusCode::OK);
    let stats = body["bowling_stats"].as_object().unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats["Off spin"], 128.7);
    assert_eq!(stats["Leg spin"], 124.2);
}

#[tokio::test]
async fn debug_reports_per_table_load_state() {
    let (status, body) = get(fixture_app(), "/debug").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["data_dir_exists"], true);
    // The fixture directory carries three of the five tables.
    assert_eq!(body["data_loaded"]["batting_data"], true);
    assert_eq!(body["data_loaded"]["batter_vs_bowler_data"], true);
    assert_eq!(body["data_loaded"]["team_vs_bowler_data"], true);
    assert_eq!(body["data_loaded"]["team_data"], false);
    assert_eq!(body["data_loaded"]["venue_data"], false);
}

#[tokio::test]
async fn config_reports_api_url_and_version() {
    let (status, body) = get(empty_app(), "/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["api_url"], "http://127.0.0.1:8000");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

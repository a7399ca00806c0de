use axum::{extract::Path, response::Json};

use crate::insights;
use crate::models::{VenueInsightsResponse, VenueListResponse};
use crate::reference::VENUES;

// GET /venues - List all venues
pub async fn get_venues() -> Json<VenueListResponse> {
    Json(VenueListResponse {
        venues: VENUES.iter().map(|v| v.to_string()).collect(),
    })
}

// GET /venue/{venue_name}/insights - Insights for a specific venue
pub async fn get_venue_insights(Path(venue_name): Path<String>) -> Json<VenueInsightsResponse> {
    let insights = insights::venue_insights(&venue_name)
        .unwrap_or_else(|| insights::default_venue_insights(&venue_name));

    Json(VenueInsightsResponse {
        venue: venue_name,
        insights,
    })
}

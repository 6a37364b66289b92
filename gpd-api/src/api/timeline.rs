//! Per-country populism timeline

use axum::{
    extract::{Path, State},
    Json,
};
use gpd_common::query::{country_timeline, TimelineEntry};
use serde::Serialize;

use super::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub country: String,
    pub timeline: Vec<TimelineEntry>,
    pub count: usize,
}

/// GET /api/timeline/:country
pub async fn get_country_timeline(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<TimelineResponse>, ApiError> {
    let timeline = country_timeline(state.dataset.rows(), &country)?;
    let count = timeline.len();
    Ok(Json(TimelineResponse { country, timeline, count }))
}

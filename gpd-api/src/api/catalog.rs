//! Distinct countries, regions and leaders

use axum::{extract::State, Json};
use gpd_common::query::{self, LeaderEntry, RegionCatalog};
use serde::{Deserialize, Serialize};

use super::params::{non_empty, ApiQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
    pub count: usize,
}

/// GET /api/countries
pub async fn get_countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    let countries = query::countries(state.dataset.iter());
    let count = countries.len();
    Json(CountriesResponse { countries, count })
}

/// GET /api/regions
pub async fn get_regions(State(state): State<AppState>) -> Json<RegionCatalog> {
    Json(query::regions(state.dataset.iter()))
}

#[derive(Debug, Deserialize)]
pub struct LeadersQuery {
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadersResponse {
    pub leaders: Vec<LeaderEntry>,
    pub count: usize,
}

/// GET /api/leaders
///
/// Optionally restricted to one country.
pub async fn get_leaders(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LeadersQuery>,
) -> Json<LeadersResponse> {
    let leaders = query::leaders(
        state.dataset.iter(),
        non_empty(params.country).as_deref(),
    );
    let count = leaders.len();
    Json(LeadersResponse { leaders, count })
}

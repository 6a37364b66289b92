//! Per-country aggregates for the world map

use axum::{extract::State, Json};
use gpd_common::query::{aggregate_by_country, CountryAggregate, Weighting, YearWindow};
use gpd_common::{Ideology, ScoreColumn};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ApiError;
use super::params::{parse_ideology, ApiQuery};
use crate::AppState;

/// Query parameters for `/api/map-data`
#[derive(Debug, Default, Deserialize)]
pub struct MapDataQuery {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    /// total | campaign | famous | international | ribbon
    pub speech_type: Option<String>,
    #[serde(default)]
    pub time_weighted: bool,
    /// Single `lr` code applied before grouping
    pub ideology: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MapFilters {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub speech_type: ScoreColumn,
    pub time_weighted: bool,
    pub ideology: Option<Ideology>,
}

#[derive(Debug, Serialize)]
pub struct MapDataResponse {
    pub map_data: Vec<CountryAggregate>,
    pub filters: MapFilters,
}

/// GET /api/map-data
///
/// Time weighting only takes effect when both window bounds are given.
pub async fn get_map_data(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MapDataQuery>,
) -> Result<Json<MapDataResponse>, ApiError> {
    let column = params
        .speech_type
        .as_deref()
        .map(ScoreColumn::from_param)
        .unwrap_or_default();
    let ideology = params
        .ideology
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(parse_ideology)
        .transpose()?;

    let window = YearWindow::new(params.year_start, params.year_end);
    let weighting = Weighting::for_window(&window, params.time_weighted);
    debug!(
        "Map query: window={:?} column={} weighting={:?} ideology={:?}",
        window, column, weighting, ideology
    );

    let rows = window
        .filter(state.dataset.iter())
        .filter(|term| ideology.is_none() || term.ideology == ideology);
    let map_data = aggregate_by_country(rows, column, weighting);

    Ok(Json(MapDataResponse {
        map_data,
        filters: MapFilters {
            year_start: params.year_start,
            year_end: params.year_end,
            speech_type: column,
            time_weighted: params.time_weighted,
            ideology,
        },
    }))
}

//! Leader terms ranked by score

use axum::{extract::State, Json};
use gpd_common::query::{rank_terms, RankOptions, RankedTerm, YearWindow};
use gpd_common::{Ideology, ScoreColumn};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::params::{parse_ideology_set, ApiQuery};
use crate::AppState;

/// Query parameters for `/api/rankings`
#[derive(Debug, Default, Deserialize)]
pub struct RankingsQuery {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub speech_type: Option<String>,
    pub limit: Option<usize>,
    /// Comma-separated `lr` codes, e.g. `-1,1`
    pub ideology: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankingFilters {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub speech_type: ScoreColumn,
    pub limit: Option<usize>,
    pub ideology: Option<Vec<Ideology>>,
}

#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub rankings: Vec<RankedTerm>,
    pub count: usize,
    pub filters: RankingFilters,
}

/// GET /api/rankings
pub async fn get_rankings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RankingsQuery>,
) -> Result<Json<RankingsResponse>, ApiError> {
    let column = params
        .speech_type
        .as_deref()
        .map(ScoreColumn::from_param)
        .unwrap_or_default();
    let options = RankOptions {
        limit: params.limit,
        ideologies: parse_ideology_set(params.ideology.as_deref())?,
    };

    let window = YearWindow::new(params.year_start, params.year_end);
    let rankings = rank_terms(window.filter(state.dataset.iter()), column, &options);
    let count = rankings.len();

    Ok(Json(RankingsResponse {
        rankings,
        count,
        filters: RankingFilters {
            year_start: params.year_start,
            year_end: params.year_end,
            speech_type: column,
            limit: options.limit,
            ideology: options.ideologies.map(|set| set.into_iter().collect()),
        },
    }))
}

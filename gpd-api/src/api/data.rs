//! Filtered records and dataset summary

use axum::{extract::State, Json};
use gpd_common::query::{summarize_dataset, DatasetSummary, RecordFilter, YearWindow};
use gpd_common::LeaderTerm;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::params::{non_empty, ApiQuery};
use crate::AppState;

/// Query parameters for `/api/data`
#[derive(Debug, Default, Deserialize)]
pub struct DataQuery {
    pub country: Option<String>,
    pub leader: Option<String>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub min_populism: Option<f64>,
}

impl From<DataQuery> for RecordFilter {
    fn from(q: DataQuery) -> Self {
        Self {
            country: non_empty(q.country),
            leader: non_empty(q.leader),
            window: YearWindow::new(q.year_start, q.year_end),
            min_populism: q.min_populism,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: Vec<LeaderTerm>,
    pub count: usize,
}

/// GET /api/data
pub async fn get_data(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DataQuery>,
) -> Json<DataResponse> {
    debug!("Record query: {:?}", params);
    let filter = RecordFilter::from(params);
    let data: Vec<LeaderTerm> = filter.apply(state.dataset.iter()).into_iter().cloned().collect();
    let count = data.len();
    Json(DataResponse { data, count })
}

/// GET /api/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<DatasetSummary> {
    Json(summarize_dataset(state.dataset.rows()))
}

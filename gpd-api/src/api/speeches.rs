//! Speech catalog, speech text and speech analysis

use axum::{
    extract::{Path, State},
    Json,
};
use gpd_common::query::{list_speeches, SpeechEntry, SpeechFilter};
use gpd_common::summarize::{excerpt, ModelInfo, SummaryRequest};
use gpd_common::{Ideology, ScoreColumn};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::error::ApiError;
use super::params::{non_empty, parse_ideology, ApiQuery};
use crate::AppState;

/// Query parameters for `/api/speeches`
#[derive(Debug, Default, Deserialize)]
pub struct SpeechesQuery {
    pub country: Option<String>,
    pub ideology: Option<String>,
    /// Omitted or `total` lists every speech type
    pub speech_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeechListFilters {
    pub country: Option<String>,
    pub ideology: Option<Ideology>,
    pub speech_type: ScoreColumn,
}

#[derive(Debug, Serialize)]
pub struct SpeechesResponse {
    pub speeches: Vec<SpeechEntry>,
    pub count: usize,
    pub filters: SpeechListFilters,
}

/// GET /api/speeches
pub async fn get_speeches(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SpeechesQuery>,
) -> Result<Json<SpeechesResponse>, ApiError> {
    let filter = SpeechFilter {
        country: non_empty(params.country),
        ideology: params
            .ideology
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(parse_ideology)
            .transpose()?,
        speech_type: params
            .speech_type
            .as_deref()
            .map(ScoreColumn::from_param)
            .unwrap_or_default(),
    };

    let speeches = list_speeches(state.dataset.iter(), &filter);
    let count = speeches.len();
    Ok(Json(SpeechesResponse {
        speeches,
        count,
        filters: SpeechListFilters {
            country: filter.country,
            ideology: filter.ideology,
            speech_type: filter.speech_type,
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct SpeechContent {
    pub filename: String,
    pub content: String,
    pub word_count: usize,
}

/// GET /api/speeches/:filename
pub async fn get_speech_content(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<SpeechContent>, ApiError> {
    let content = read_speech(&state, &filename).await?;
    let word_count = content.split_whitespace().count();
    Ok(Json(SpeechContent {
        filename,
        content,
        word_count,
    }))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub model_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeechAnalysis {
    pub filename: String,
    pub summary: String,
    pub populism_assessment: String,
    pub analyzed_words: usize,
    pub total_words: usize,
}

/// POST /api/speeches/:filename/analyze
///
/// Sends the leading `max_analysis_words` words to the configured summarizer.
pub async fn analyze_speech(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    ApiQuery(params): ApiQuery<AnalyzeQuery>,
) -> Result<Json<SpeechAnalysis>, ApiError> {
    let content = read_speech(&state, &filename).await?;
    let excerpt = excerpt(&content, state.max_analysis_words);

    info!(
        "Analyzing {} ({} of {} words)",
        filename, excerpt.analyzed_words, excerpt.total_words
    );
    let result = state
        .summarizer
        .summarize(SummaryRequest {
            text: excerpt.text,
            model_id: non_empty(params.model_id),
        })
        .await?;

    Ok(Json(SpeechAnalysis {
        filename,
        summary: result.summary,
        populism_assessment: result.populism_assessment,
        analyzed_words: excerpt.analyzed_words,
        total_words: excerpt.total_words,
    }))
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

/// GET /api/models
pub async fn get_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.summarizer.models(),
    })
}

/// Resolve a bare file name inside the speeches directory
fn speech_path(state: &AppState, filename: &str) -> Result<PathBuf, ApiError> {
    let invalid = filename.trim().is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
        || filename.contains('\0');
    if invalid {
        warn!("Rejected speech filename: {:?}", filename);
        return Err(ApiError::BadRequest(format!(
            "Invalid speech filename '{}'",
            filename
        )));
    }
    Ok(state.speeches_dir.join(filename))
}

/// Read a speech file; non-UTF-8 bytes are replaced
async fn read_speech(state: &AppState, filename: &str) -> Result<String, ApiError> {
    let path = speech_path(state, filename)?;
    debug!("Reading speech {}", path.display());

    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ApiError::NotFound(format!(
            "Speech '{}' not found",
            filename
        ))),
        Err(e) => Err(ApiError::Internal(format!(
            "Failed to read speech '{}': {}",
            filename, e
        ))),
    }
}

//! gpd-api library - HTTP query service for the Global Populism Database
//!
//! Thin routing layer over the pure query functions in `gpd-common`: parses
//! query parameters, maps errors to status codes and encodes JSON.

use axum::Router;
use gpd_common::summarize::{SpeechSummarizer, UnavailableSummarizer};
use gpd_common::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod api;
pub mod summarizer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Leader-term table (read-only for the process lifetime)
    pub dataset: Dataset,
    /// Directory holding speech text files
    pub speeches_dir: PathBuf,
    /// Text-generation capability for speech analysis
    pub summarizer: Arc<dyn SpeechSummarizer>,
    /// Words of a speech sent to the summarizer
    pub max_analysis_words: usize,
}

impl AppState {
    /// Create application state with speech analysis unavailable
    pub fn new(dataset: Dataset, speeches_dir: PathBuf) -> Self {
        Self {
            dataset,
            speeches_dir,
            summarizer: Arc::new(UnavailableSummarizer),
            max_analysis_words: gpd_common::config::DEFAULT_MAX_WORDS,
        }
    }

    pub fn with_summarizer(mut self, summarizer: Arc<dyn SpeechSummarizer>, max_words: usize) -> Self {
        self.summarizer = summarizer;
        self.max_analysis_words = max_words;
        self
    }
}

/// Build application router
///
/// `static_dir`, when it exists, is served for any path no API route matches.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    use axum::routing::{get, post};

    let router = Router::new()
        .route("/", get(api::api_root))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/countries", get(api::get_countries))
        .route("/api/regions", get(api::get_regions))
        .route("/api/leaders", get(api::get_leaders))
        .route("/api/data", get(api::get_data))
        .route("/api/summary", get(api::get_summary))
        .route("/api/map-data", get(api::get_map_data))
        .route("/api/rankings", get(api::get_rankings))
        .route("/api/timeline/:country", get(api::get_country_timeline))
        .route("/api/speeches", get(api::get_speeches))
        .route("/api/speeches/:filename", get(api::get_speech_content))
        .route("/api/speeches/:filename/analyze", post(api::analyze_speech))
        .route("/api/models", get(api::get_models))
        .merge(api::health_routes())
        .with_state(state);

    let router = match static_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => {
            info!("Serving frontend from {}", dir.display());
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        None => {
            info!("Frontend not mounted (no static directory)");
            router
        }
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

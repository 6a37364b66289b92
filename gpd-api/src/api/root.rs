//! API description at `/`

use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn api_root() -> Json<Value> {
    Json(json!({
        "message": "Global Populism Database API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/countries": "List all countries",
            "/api/regions": "List all regions",
            "/api/leaders": "List leaders (optional ?country=)",
            "/api/data": "Filtered records",
            "/api/summary": "Dataset summary statistics",
            "/api/map-data": "Per-country averages for the world map",
            "/api/rankings": "Leader terms ranked by populism score",
            "/api/timeline/{country}": "Populism timeline for one country",
            "/api/speeches": "Speech files referenced by the dataset",
            "/api/speeches/{filename}": "Speech text",
            "/api/speeches/{filename}/analyze": "Summarize a speech (POST)",
            "/api/models": "Models available for speech analysis",
            "/api/buildinfo": "Build identification",
            "/health": "Health check",
        }
    }))
}

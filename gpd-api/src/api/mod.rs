//! HTTP API handlers for gpd-api

pub mod buildinfo;
pub mod catalog;
pub mod data;
pub mod error;
pub mod health;
pub mod map;
pub mod params;
pub mod rankings;
pub mod root;
pub mod speeches;
pub mod timeline;

pub use buildinfo::get_build_info;
pub use catalog::{get_countries, get_leaders, get_regions};
pub use data::{get_data, get_summary};
pub use error::ApiError;
pub use health::health_routes;
pub use map::get_map_data;
pub use rankings::get_rankings;
pub use root::api_root;
pub use speeches::{analyze_speech, get_models, get_speech_content, get_speeches};
pub use timeline::get_country_timeline;

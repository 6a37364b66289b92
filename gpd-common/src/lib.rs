//! # Global Populism Database core
//!
//! Shared code for the populism database service:
//! - Leader-term data model and CSV dataset loading
//! - Query functions (interval-overlap filter, country aggregation, rankings)
//! - Configuration loading
//! - Speech summarization capability
//! - Error types

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod query;
pub mod summarize;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use model::{Ideology, LeaderTerm, ScoreColumn, TermEnd, CURRENT_TERM_YEAR};

//! Speech summarization capability
//!
//! Text generation is an optional external collaborator. Callers depend on the
//! [`SpeechSummarizer`] trait only; when nothing is configured the
//! [`UnavailableSummarizer`] reports "unavailable" instead of failing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Speech analysis is unavailable")]
    Unavailable,
    #[error("Unknown model: {0}")]
    UnknownModel(String),
    #[error("Summarizer backend error: {0}")]
    Backend(String),
}

/// A model the summarizer can be asked to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub text: String,
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechSummary {
    pub summary: String,
    pub populism_assessment: String,
}

#[async_trait]
pub trait SpeechSummarizer: Send + Sync {
    /// Summarize a speech and assess its populist rhetoric
    async fn summarize(&self, request: SummaryRequest) -> Result<SpeechSummary, SummarizeError>;

    /// Models accepted in [`SummaryRequest::model_id`]
    fn models(&self) -> Vec<ModelInfo>;
}

/// Summarizer used when no backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSummarizer;

#[async_trait]
impl SpeechSummarizer for UnavailableSummarizer {
    async fn summarize(&self, _request: SummaryRequest) -> Result<SpeechSummary, SummarizeError> {
        Err(SummarizeError::Unavailable)
    }

    fn models(&self) -> Vec<ModelInfo> {
        Vec::new()
    }
}

/// Leading words of a speech sent for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub text: String,
    pub analyzed_words: usize,
    pub total_words: usize,
}

/// Keep at most `max_words` whitespace-separated words
pub fn excerpt(text: &str, max_words: usize) -> Excerpt {
    let words: Vec<&str> = text.split_whitespace().collect();
    let analyzed = words.len().min(max_words);
    Excerpt {
        text: words[..analyzed].join(" "),
        analyzed_words: analyzed,
        total_words: words.len(),
    }
}

/// Prompt asking for a summary and a populism assessment in fixed sections
pub fn build_prompt(speech: &str) -> String {
    format!(
        "You are a political scientist who studies populist rhetoric.\n\
         Read the speech below and answer in exactly two sections.\n\
         SUMMARY: a short neutral summary of the speech (3-5 sentences).\n\
         ASSESSMENT: how populist the rhetoric is (people vs. elite framing, \
         Manichaean language, appeals to the popular will), with examples.\n\n\
         Speech:\n{}",
        speech
    )
}

/// Split a model reply into its SUMMARY and ASSESSMENT sections
///
/// A reply without the markers is used whole as the summary.
pub fn parse_reply(reply: &str) -> SpeechSummary {
    const SUMMARY: &str = "SUMMARY:";
    const ASSESSMENT: &str = "ASSESSMENT:";

    let summary_at = reply.find(SUMMARY);
    let assessment_at = reply.find(ASSESSMENT);

    match (summary_at, assessment_at) {
        (Some(s), Some(a)) if s < a => SpeechSummary {
            summary: reply[s + SUMMARY.len()..a].trim().to_string(),
            populism_assessment: reply[a + ASSESSMENT.len()..].trim().to_string(),
        },
        (None, Some(a)) => SpeechSummary {
            summary: reply[..a].trim().to_string(),
            populism_assessment: reply[a + ASSESSMENT.len()..].trim().to_string(),
        },
        _ => SpeechSummary {
            summary: reply.trim().to_string(),
            populism_assessment: String::new(),
        },
    }
}

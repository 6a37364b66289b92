//! OpenAI-compatible chat-completions backend for speech analysis
//!
//! Enabled only when `[summarizer] endpoint` is configured. Any server
//! speaking `/v1/chat/completions` works (local or hosted).

use async_trait::async_trait;
use gpd_common::config::SummarizerConfig;
use gpd_common::summarize::{
    build_prompt, parse_reply, ModelInfo, SpeechSummarizer, SpeechSummary, SummarizeError,
    SummaryRequest,
};
use std::time::Duration;
use tracing::debug;

pub struct HttpSummarizer {
    base_url: String,
    api_key: Option<String>,
    default_model: String,
    models: Vec<ModelInfo>,
    client: reqwest::Client,
}

impl HttpSummarizer {
    /// Build from configuration; `Ok(None)` when no endpoint is set
    pub fn from_config(config: &SummarizerConfig) -> Result<Option<Self>, SummarizeError> {
        let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.trim().is_empty()) else {
            return Ok(None);
        };

        let default_model = config
            .default_model
            .clone()
            .or_else(|| config.models.first().map(|m| m.id.clone()))
            .ok_or_else(|| {
                SummarizeError::Backend("summarizer needs default_model or a models list".to_string())
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SummarizeError::Backend(e.to_string()))?;

        Ok(Some(Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            default_model,
            models: config.models.clone(),
            client,
        }))
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Requested model, checked against the configured list when there is one
    fn select_model(&self, requested: Option<&str>) -> Result<String, SummarizeError> {
        match requested {
            None => Ok(self.default_model.clone()),
            Some(id) if self.models.is_empty() || self.models.iter().any(|m| m.id == id) => {
                Ok(id.to_string())
            }
            Some(id) => Err(SummarizeError::UnknownModel(id.to_string())),
        }
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }
}

#[async_trait]
impl SpeechSummarizer for HttpSummarizer {
    async fn summarize(&self, request: SummaryRequest) -> Result<SpeechSummary, SummarizeError> {
        let model = self.select_model(request.model_id.as_deref())?;
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": model,
            "messages": [{ "role": "user", "content": build_prompt(&request.text) }],
            "max_tokens": 1024,
            "temperature": 0.2,
        });

        debug!("Requesting speech analysis from {} with model {}", url, model);
        let resp = self
            .auth(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizeError::Backend(e.to_string()))?;

        let status = resp.status();
        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SummarizeError::Backend(e.to_string()))?;
        if !status.is_success() {
            let message = json["error"]["message"]
                .as_str()
                .or_else(|| json["message"].as_str())
                .unwrap_or("unknown API error");
            return Err(SummarizeError::Backend(format!("{}: {}", status, message)));
        }

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| SummarizeError::Backend("response has no message content".to_string()))?;
        Ok(parse_reply(content))
    }

    fn models(&self) -> Vec<ModelInfo> {
        self.models.clone()
    }
}

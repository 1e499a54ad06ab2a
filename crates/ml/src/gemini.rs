use std::env;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::TextGenerator;

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY missing")]
    MissingApiKey,
}

#[derive(Clone)]
pub struct GeminiConfig {
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(model) = lookup("GEMINI_MODEL").filter(|value| !value.trim().is_empty()) {
            config.model = model;
        }
        if let Some(base) = lookup("GEMINI_API_BASE").filter(|value| !value.trim().is_empty()) {
            config.api_base = base;
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http_client,
            config,
        })
    }
}

impl TextGenerator for GeminiClient {
    fn model_name(&self) -> &str {
        self.config.model()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .http_client
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&payload)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini non-success status {}: {}", status.as_u16(), body);
        }

        let body: Value = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Gemini parse failed")?;
        extract_gemini_output_text(&body)
            .filter(|value| !value.trim().is_empty())
            .context("Gemini output text missing")
    }
}

fn extract_gemini_output_text(payload: &Value) -> Option<String> {
    let parts = payload
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let chunks = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>();

    if chunks.is_empty() {
        None
    } else {
        Some(chunks.concat())
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::client::GenerativeModel;
use super::AiError;
use crate::config::{mask_key, AssistantConfig};

/// Blocking HTTP client for the hosted Gemini `generateContent` endpoint.
pub struct GeminiClient {
    base_url: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    timeout_secs: u64,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Build a client from config. Configures itself when the config
    /// carries an API key.
    pub fn new(config: &AssistantConfig) -> Result<Self, AiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::HttpClient(e.to_string()))?;

        let mut gemini = Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            timeout_secs: config.timeout_secs,
            api_key: None,
            client,
        };

        match config.api_key.as_deref() {
            Some(key) => {
                gemini.configure(key);
            }
            None => warn!("No Gemini API key configured, fallback responders only"),
        }

        Ok(gemini)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// Response body from `generateContent`
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GenerativeModel for GeminiClient {
    fn configure(&mut self, api_key: &str) -> bool {
        let key = api_key.trim();
        if key.is_empty() {
            warn!("Rejected blank Gemini API key");
            self.api_key = None;
            return false;
        }
        info!(model = %self.model, key = %mask_key(key), "Gemini client configured");
        self.api_key = Some(key.to_string());
        true
    }

    fn is_ready(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::NotConfigured)?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AiError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AiError::Timeout(self.timeout_secs)
                } else {
                    AiError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(AiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| AiError::ResponseParsing(e.to_string()))?;

        let text = parsed.into_text().ok_or(AiError::EmptyResponse)?;
        debug!(len = text.len(), "Gemini response received");
        Ok(text)
    }
}

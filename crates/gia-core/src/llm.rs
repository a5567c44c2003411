//! OpenAI-compatible chat completion client.
//!
//! Talks to any provider exposing `POST {base_url}/chat/completions`
//! (OpenRouter by default) with bearer authentication.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, GenerationError, GiaResult};

/// One message of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<ProviderErrorBody>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

// Some providers (OpenRouter among them) report failures inside a 2xx body.
#[derive(Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Chat completion client.
#[derive(Clone)]
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    client: reqwest::Client,
}

impl ChatClient {
    /// Create a client from the analyzer config.
    pub fn new(config: &AnalyzerConfig) -> GiaResult<Self> {
        Self::with_timeout(
            &config.model_base_url,
            &config.api_key,
            &config.model,
            config.temperature,
            config.timeout,
        )
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: &str,
        model: &str,
        temperature: f64,
        timeout: Duration,
    ) -> GiaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AnalyzerError::HttpClient)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the messages and return the first choice's text verbatim.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        debug!(model = %self.model, messages = messages.len(), "Calling chat completion API");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: ChatCompletionResponse =
            response.json().await.map_err(GenerationError::Decode)?;

        if let Some(err) = result.error {
            return Err(GenerationError::Provider(
                err.message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyChoices)?;

        let content = choice
            .message
            .and_then(|m| m.content)
            .ok_or(GenerationError::MissingContent)?;

        debug!(chars = content.len(), "Received completion");

        Ok(content)
    }
}

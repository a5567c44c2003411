//! Runtime configuration for the analysis pipeline.

use std::time::Duration;

/// Default GitHub REST API URL.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default OpenAI-compatible chat completion base URL.
pub const DEFAULT_MODEL_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Low temperature keeps the analysis focused.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Default timeout applied to each outbound request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the model provider API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings shared by the issue fetcher and the model client.
#[derive(Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub model_base_url: String,
    pub model: String,
    pub temperature: f64,
    pub github_api_url: String,
    pub timeout: Duration,
}

impl AnalyzerConfig {
    /// Create a config with default endpoints for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_base_url: DEFAULT_MODEL_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model_base_url(mut self, url: impl Into<String>) -> Self {
        self.model_base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The API key stays out of debug output and logs.
impl std::fmt::Debug for AnalyzerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerConfig")
            .field("api_key", &"<redacted>")
            .field("model_base_url", &self.model_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("github_api_url", &self.github_api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

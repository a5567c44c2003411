//! Issue tracker and model provider settings shared by commands.

use anyhow::{bail, Result};
use clap::Args;
use gia_core::config::{
    AnalyzerConfig, API_KEY_ENV, DEFAULT_GITHUB_API_URL, DEFAULT_MODEL, DEFAULT_MODEL_BASE_URL,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use std::time::Duration;

#[derive(Args, Clone)]
pub struct ProviderArgs {
    /// Model provider API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: String,

    /// OpenAI-compatible chat completion base URL
    #[arg(long, env = "GIA_MODEL_BASE_URL", default_value = DEFAULT_MODEL_BASE_URL)]
    pub model_base_url: String,

    /// Chat model identifier
    #[arg(long, env = "GIA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "GIA_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// GitHub REST API base URL
    #[arg(long, env = "GIA_GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub github_api_url: String,

    /// Timeout for each outbound request, in seconds
    #[arg(long, env = "GIA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ProviderArgs {
    pub fn into_config(self) -> Result<AnalyzerConfig> {
        if self.api_key.trim().is_empty() {
            bail!(
                "{} is empty.\nSet it with: export {}=your-key (or add it to .env)",
                API_KEY_ENV,
                API_KEY_ENV
            );
        }

        Ok(AnalyzerConfig::new(self.api_key)
            .with_model_base_url(self.model_base_url)
            .with_model(self.model)
            .with_temperature(self.temperature)
            .with_github_api_url(self.github_api_url)
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        provider: ProviderArgs,
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "gia",
            "--api-key",
            "sk-test",
            "--model",
            "openai/gpt-4o-mini",
            "--timeout-secs",
            "5",
        ]);
        let config = cli.provider.into_config().unwrap();
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let cli = TestCli::parse_from(["gia", "--api-key", "  "]);
        assert!(cli.provider.into_config().is_err());
    }
}

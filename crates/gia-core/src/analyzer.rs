//! The issue analysis pipeline: validate, fetch, prompt, generate.

use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::error::GiaResult;
use crate::github::GitHubClient;
use crate::issue::{Analysis, IssueRequest};
use crate::llm::ChatClient;
use crate::prompt::build_messages;

/// Fetches an issue and asks the model to analyze it.
///
/// Both clients are built once and only read afterwards, so one analyzer
/// can be shared across concurrent requests behind an `Arc`.
#[derive(Clone)]
pub struct IssueAnalyzer {
    github: GitHubClient,
    llm: ChatClient,
}

impl IssueAnalyzer {
    pub fn new(github: GitHubClient, llm: ChatClient) -> Self {
        Self { github, llm }
    }

    /// Build both clients from a config.
    pub fn from_config(config: &AnalyzerConfig) -> GiaResult<Self> {
        debug!(?config, "Building issue analyzer");
        let github = GitHubClient::new(&config.github_api_url, config.timeout)?;
        let llm = ChatClient::new(config)?;
        Ok(Self::new(github, llm))
    }

    /// Run the pipeline for one request. Stops at the first failure.
    pub async fn analyze(&self, request: &IssueRequest) -> GiaResult<Analysis> {
        request.validate()?;

        info!(
            owner = %request.owner,
            repo = %request.repo,
            issue_number = request.issue_number,
            "Analyzing issue"
        );

        let issue = self
            .github
            .fetch_issue(&request.owner, &request.repo, request.issue_number)
            .await?;

        let messages = build_messages(&issue);
        let analysis = self.llm.complete(&messages).await?;

        info!(
            owner = %request.owner,
            repo = %request.repo,
            issue_number = request.issue_number,
            model = %self.llm.model(),
            "Issue analyzed"
        );

        Ok(Analysis { analysis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnalyzerError, ErrorKind, GenerationError};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analyzer(github: &MockServer, model: &MockServer) -> IssueAnalyzer {
        let config = AnalyzerConfig::new("sk-test")
            .with_github_api_url(github.uri())
            .with_model_base_url(model.uri())
            .with_timeout(Duration::from_secs(5));
        IssueAnalyzer::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_sends_issue_text_to_model() {
        let github = MockServer::start().await;
        let model = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/issues/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Bug: crash on startup"
            })))
            .mount(&github)
            .await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(wiremock::matchers::body_partial_json(serde_json::json!({
                "messages": [
                    {"role": "system", "content": crate::prompt::SYSTEM_PROMPT},
                    {"role": "user", "content": "Issue Title: Bug: crash on startup\n\nDescription:\n"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "Summary: startup crash."}}]
            })))
            .expect(1)
            .mount(&model)
            .await;

        let result = analyzer(&github, &model)
            .analyze(&IssueRequest::new("octocat", "Hello-World", 1))
            .await
            .unwrap();

        assert_eq!(result.analysis, "Summary: startup crash.");
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_model_call() {
        let github = MockServer::start().await;
        let model = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&github)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&model)
            .await;

        let err = analyzer(&github, &model)
            .analyze(&IssueRequest::new("octocat", "Hello-World", 42))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_empty_choices_surfaces_generation_error() {
        let github = MockServer::start().await;
        let model = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "t", "body": "b"
            })))
            .mount(&github)
            .await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&model)
            .await;

        let err = analyzer(&github, &model)
            .analyze(&IssueRequest::new("octocat", "Hello-World", 1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalyzerError::Generation(GenerationError::EmptyChoices)
        ));
    }

    #[tokio::test]
    async fn test_invalid_request_makes_no_calls() {
        let github = MockServer::start().await;
        let model = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&github)
            .await;

        let err = analyzer(&github, &model)
            .analyze(&IssueRequest::new("", "Hello-World", 1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }
}

//! GitHub REST client for reading a single issue.
//!
//! Requests are unauthenticated, so they share GitHub's anonymous rate limit.

use std::time::Duration;

use tracing::debug;

use crate::error::{AnalyzerError, FetchError, GiaResult};
use crate::issue::IssueData;

/// GitHub rejects requests that carry no user agent.
const USER_AGENT: &str = concat!("gia/", env!("CARGO_PKG_VERSION"));

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Issue tracker client.
#[derive(Clone)]
pub struct GitHubClient {
    base_url: String,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a client against the given API URL with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> GiaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(AnalyzerError::HttpClient)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn issue_url(&self, owner: &str, repo: &str, issue_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}",
            self.base_url, owner, repo, issue_number
        )
    }

    /// Fetch one issue. Any non-2xx status becomes [`FetchError::Status`].
    pub async fn fetch_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<IssueData, FetchError> {
        let url = self.issue_url(owner, repo, issue_number);
        debug!(url = %url, "Fetching GitHub issue");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let issue: IssueData = response.json().await.map_err(FetchError::Decode)?;

        debug!(
            number = ?issue.number,
            state = ?issue.state,
            html_url = ?issue.html_url,
            "Fetched GitHub issue"
        );

        Ok(issue)
    }
}

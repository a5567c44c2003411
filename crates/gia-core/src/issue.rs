//! Issue request and issue data models.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, GiaResult};

/// Identifies the issue to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

impl IssueRequest {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, issue_number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            issue_number,
        }
    }

    /// Reject blank identifiers and issue number zero.
    pub fn validate(&self) -> GiaResult<()> {
        if self.owner.trim().is_empty() {
            return Err(AnalyzerError::invalid_request("owner must not be empty"));
        }
        if self.repo.trim().is_empty() {
            return Err(AnalyzerError::invalid_request("repo must not be empty"));
        }
        if self.issue_number == 0 {
            return Err(AnalyzerError::invalid_request(
                "issue_number must be a positive integer",
            ));
        }
        Ok(())
    }
}

/// The subset of a GitHub issue that the analyzer reads.
///
/// GitHub sends `"body": null` for issues without a description, so every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl IssueData {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Successful analysis payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_request() {
        assert!(IssueRequest::new("octocat", "Hello-World", 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let err = IssueRequest::new("  ", "Hello-World", 1).validate().unwrap_err();
        assert!(err.to_string().contains("owner"));

        let err = IssueRequest::new("octocat", "", 1).validate().unwrap_err();
        assert!(err.to_string().contains("repo"));

        let err = IssueRequest::new("octocat", "Hello-World", 0).validate().unwrap_err();
        assert!(err.to_string().contains("issue_number"));
    }

    #[test]
    fn test_issue_data_tolerates_missing_and_null_fields() {
        let issue: IssueData = serde_json::from_str(r#"{"title": "Crash"}"#).unwrap();
        assert_eq!(issue.title(), "Crash");
        assert_eq!(issue.body(), "");

        let issue: IssueData =
            serde_json::from_str(r#"{"title": null, "body": null, "number": 7}"#).unwrap();
        assert_eq!(issue.title(), "");
        assert_eq!(issue.body(), "");
        assert_eq!(issue.number, Some(7));
    }

    #[test]
    fn test_issue_data_ignores_unknown_fields() {
        let json = r#"{
            "number": 1,
            "title": "Found a bug",
            "body": "I'm having a problem with this.",
            "state": "open",
            "html_url": "https://github.com/octocat/Hello-World/issues/1",
            "user": {"login": "octocat"},
            "labels": []
        }"#;
        let issue: IssueData = serde_json::from_str(json).unwrap();
        assert_eq!(issue.title(), "Found a bug");
        assert_eq!(issue.state.as_deref(), Some("open"));
    }

    #[test]
    fn test_analysis_serializes_to_analysis_field() {
        let value = serde_json::to_value(Analysis {
            analysis: "Looks like a regression.".to_string(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"analysis": "Looks like a regression."}));
    }
}

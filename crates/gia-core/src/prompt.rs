//! Chat prompt construction for issue analysis.

use crate::issue::IssueData;
use crate::llm::ChatMessage;

/// System instruction sent ahead of every issue.
pub const SYSTEM_PROMPT: &str =
    "You are an assistant that analyzes GitHub issues and provides summaries and suggestions.";

/// Render the user message for an issue. Missing fields render as empty text.
pub fn build_user_message(issue: &IssueData) -> String {
    format!(
        "Issue Title: {}\n\nDescription:\n{}",
        issue.title(),
        issue.body()
    )
}

/// The two-message exchange: system instruction, then the issue.
pub fn build_messages(issue: &IssueData) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_user_message(issue)),
    ]
}

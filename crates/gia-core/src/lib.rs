//! GIA Core Library
//!
//! Fetches a GitHub issue and asks a chat completion model to analyze it.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod github;
pub mod issue;
pub mod llm;
pub mod prompt;

pub use analyzer::IssueAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, ErrorKind, FetchError, GenerationError, GiaResult};
pub use issue::{Analysis, IssueData, IssueRequest};

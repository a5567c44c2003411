//! Centralized error types for GIA.

use thiserror::Error;

/// Failure while fetching an issue from the issue tracker.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("GitHub request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse GitHub issue: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failure while generating an analysis with the model provider.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Model provider error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Model provider request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse model provider response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Model provider returned an error: {0}")]
    Provider(String),

    #[error("Model provider returned no completion choices")]
    EmptyChoices,

    #[error("Model provider returned a completion choice without content")]
    MissingContent,
}

/// Coarse classification of an [`AnalyzerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    Fetch,
    Generation,
}

/// Main error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Result type for GIA operations.
pub type GiaResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Which stage of the pipeline failed. Client construction failures
    /// happen before any request is served and count as fetch-side setup.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Fetch(_) | Self::HttpClient(_) => ErrorKind::Fetch,
            Self::Generation(_) => ErrorKind::Generation,
        }
    }
}

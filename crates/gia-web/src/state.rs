//! Application state.

use gia_core::IssueAnalyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<IssueAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: IssueAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

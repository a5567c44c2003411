//! Issue analysis route handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use gia_core::{Analysis, IssueRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /analyze_issue/ - Fetch an issue and return the model's analysis.
pub async fn analyze_issue(
    State(state): State<AppState>,
    payload: Result<Json<IssueRequest>, JsonRejection>,
) -> Result<Json<Analysis>, ApiError> {
    let Json(request) = payload?;
    let analysis = state.analyzer.analyze(&request).await?;
    Ok(Json(analysis))
}

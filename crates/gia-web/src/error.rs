//! Mapping of pipeline errors onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gia_core::{AnalyzerError, ErrorKind};
use serde::Serialize;
use tracing::warn;

/// Body of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by route handlers.
#[derive(Debug)]
pub enum ApiError {
    Analyzer(AnalyzerError),
    InvalidBody(JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Analyzer(err) => match err.kind() {
                ErrorKind::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::Fetch | ErrorKind::Generation => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        Self::Analyzer(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Analyzer(err) => err.to_string(),
            Self::InvalidBody(rejection) => rejection.body_text(),
        };
        warn!(status = %status, error = %message, "Request failed");
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

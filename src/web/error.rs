//! Error responses for the HTTP interface

use crate::core::CodeError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Anything that stops a request from producing a score
#[derive(Debug, Error)]
pub enum ApiError {
    /// A field is not four unique digits
    #[error("{field}: {source}")]
    Validation {
        field: &'static str,
        source: CodeError,
    },

    /// The evaluator refused its input
    #[error("{0}")]
    Evaluation(CodeError),

    /// The body is not the expected JSON
    #[error(transparent)]
    Payload(#[from] JsonRejection),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Evaluation(_) => StatusCode::BAD_REQUEST,
            Self::Payload(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Payload(rejection) => rejection.body_text(),
            other => other.to_string(),
        };
        (self.status(), Json(json!({ "detail": detail }))).into_response()
    }
}

// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::message::ErrorBody;

/// Failures talking to the inference service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to inference service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("inference service response had no text content")]
    MissingText,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Caller sent something we will not forward. Surfaced as 400.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(msg) => {
                warn!(reason = %msg, "rejected chat request");
                (StatusCode::BAD_REQUEST, msg)
            }
            // Upstream detail stays in the logs.
            AppError::Upstream(e) => {
                error!(error = %e, "inference call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upstream_detail_is_not_leaked() {
        let err = AppError::from(UpstreamError::Status {
            status: 401,
            body: "invalid x-api-key".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "internal server error");
    }

    #[tokio::test]
    async fn invalid_request_keeps_its_message() {
        let response = AppError::InvalidRequest("Invalid message role".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Invalid message role");
    }
}

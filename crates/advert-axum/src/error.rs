//! Axum-specific error types and mappings.
//!
//! This module provides the adapter's error type and the mapping from
//! `CoreError` to HTTP status codes and response bodies.

use advert_core::{CoreError, QueryError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::{ApiResponse, ErrorBody};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource or route not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Route exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Bad request (invalid input, query or body).
    #[error("Bad request: {error}")]
    BadRequest {
        error: String,
        detail: Option<String>,
    },

    /// Request body exceeds the configured limit.
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Request did not complete within the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error. The message is logged, never sent.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// Body rejected as malformed JSON.
    pub fn malformed_body() -> Self {
        Self::BadRequest {
            error: status_text(StatusCode::BAD_REQUEST),
            detail: Some("format not correct".to_string()),
        }
    }

    /// Path not served by any route.
    pub fn route_not_found() -> Self {
        Self::NotFound(status_text(StatusCode::NOT_FOUND))
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "request failed");
                ErrorBody {
                    error: status_text(status),
                    detail: None,
                }
            }
            Self::BadRequest { error, detail } => {
                tracing::info!(status = status.as_u16(), %error, detail = ?detail, "request rejected");
                ErrorBody { error, detail }
            }
            Self::NotFound(error) | Self::Conflict(error) => {
                tracing::info!(status = status.as_u16(), %error, "request rejected");
                ErrorBody {
                    error,
                    detail: None,
                }
            }
            Self::MethodNotAllowed | Self::PayloadTooLarge | Self::RequestTimeout => {
                tracing::info!(status = status.as_u16(), "request rejected");
                ErrorBody {
                    error: status_text(status),
                    detail: None,
                }
            }
        };

        ApiResponse::<()>::Error { status, body }.into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NameAlreadyExists(_) => Self::Conflict(err.to_string()),
            CoreError::ItemNotExists(_) | CoreError::NoItems => Self::NotFound(err.to_string()),
            CoreError::Validation(v) => Self::BadRequest {
                error: v.title().to_string(),
                detail: Some(v.to_string()),
            },
            CoreError::Query(q) => q.into(),
            CoreError::Constraint(msg) => Self::BadRequest {
                error: status_text(StatusCode::BAD_REQUEST),
                detail: Some(msg),
            },
            CoreError::Storage { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<QueryError> for HttpError {
    fn from(err: QueryError) -> Self {
        Self::BadRequest {
            error: QueryError::TITLE.to_string(),
            detail: Some(err.to_string()),
        }
    }
}

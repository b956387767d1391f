//! JSON response rendering.
//!
//! Every response body, success or error, goes through [`ApiResponse`] so
//! that the envelope shape and the content type are decided in one place.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type sent with every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Paging metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub max_page: u32,
}

/// JSON error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A complete API response.
///
/// - `Single` renders `{"data": {...}}`, or `{}` without data.
/// - `Multi` renders `{"data": [...], "meta": {...}}`; an empty list
///   without metadata renders `{}`.
/// - `Error` renders the [`ErrorBody`].
#[derive(Debug)]
pub enum ApiResponse<T> {
    Single {
        status: StatusCode,
        data: Option<T>,
    },
    Multi {
        status: StatusCode,
        data: Vec<T>,
        meta: Option<PageMeta>,
    },
    Error {
        status: StatusCode,
        body: ErrorBody,
    },
}

#[derive(Serialize)]
struct Envelope<D> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with a single object.
    pub const fn ok(data: T) -> Self {
        Self::Single {
            status: StatusCode::OK,
            data: Some(data),
        }
    }

    /// 200 with an empty object.
    pub const fn empty() -> Self {
        Self::Single {
            status: StatusCode::OK,
            data: None,
        }
    }

    /// 201 with the created entries.
    pub const fn created(data: Vec<T>) -> Self {
        Self::Multi {
            status: StatusCode::CREATED,
            data,
            meta: None,
        }
    }

    /// 200 with one page of a list.
    pub const fn page(data: Vec<T>, max_page: u32) -> Self {
        Self::Multi {
            status: StatusCode::OK,
            data,
            meta: Some(PageMeta { max_page }),
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Single { status, .. } | Self::Multi { status, .. } | Self::Error { status, .. } => {
                *status
            }
        }
    }

    fn render(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::Single { data, .. } => serde_json::to_vec(&Envelope {
                data: data.as_ref(),
                meta: None,
            }),
            Self::Multi { data, meta, .. } => {
                let data = (!data.is_empty() || meta.is_some()).then_some(data.as_slice());
                serde_json::to_vec(&Envelope { data, meta: *meta })
            }
            Self::Error { body, .. } => serde_json::to_vec(body),
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response()
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => json_response(self.status(), body),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    br#"{"error":"Internal Server Error"}"#.to_vec(),
                )
            }
        }
    }
}

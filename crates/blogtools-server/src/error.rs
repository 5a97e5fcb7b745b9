use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use blogtools_core::error::CoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// A call to the page, the model or the hosting repository failed.
    /// `error` is the client-facing summary, `details` the underlying cause.
    Upstream {
        error: &'static str,
        details: String,
    },
}

impl ApiError {
    pub fn upstream(error: &'static str, cause: impl std::fmt::Display) -> Self {
        ApiError::Upstream {
            error,
            details: cause.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: msg,
                    details: None,
                },
            ),
            ApiError::Upstream { error, details } => {
                tracing::error!(details = %details, "{error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: error.to_string(),
                        details: Some(details),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

//! Boundary-layer error taxonomy.
//!
//! The core engine is total over well-formed, in-bounds input; every
//! rejection happens here before synthesis runs. A request either fully
//! succeeds with a complete series or fails with one of these.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pak_geo::{Bounds, PAKISTAN_BOUNDS};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input; the caller must fix the request.
    #[error("{0}")]
    Validation(String),
    /// Location outside Pakistan; the response embeds the bounding box so
    /// the caller can self-correct.
    #[error("location is outside Pakistan")]
    OutOfBounds,
    /// A record lookup failed (history / profile routes).
    #[error("{0}")]
    NotFound(String),
    /// A backing computation surfaced an error payload. Results are
    /// deterministic, so there is no automatic retry.
    #[error("upstream failure: {0}")]
    Upstream(String),
    /// Anything unexpected; logged and reported as a generic 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::OutOfBounds => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let bounds = match self {
            ApiError::OutOfBounds => Some(PAKISTAN_BOUNDS),
            _ => None,
        };
        let body = ErrorBody { error: self.to_string(), bounds };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::OutOfBounds.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Upstream("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! Error types for the API layer.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! converts into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Response
//! bodies carry exactly one `error` key with the Spanish client-facing
//! message; internal detail stays in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Errors that can occur while answering an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request field was absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The requested resource or route does not exist.
    #[error("resource not found")]
    NotFound,

    /// An unexpected internal failure. The detail is logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingField(field) => {
                (StatusCode::BAD_REQUEST, format!("Campo requerido: {field}"))
            }
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                String::from("Recurso no encontrado"),
            ),
            Self::Internal(detail) => {
                error!(detail = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Error interno del servidor"),
                )
            }
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn status_of(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn variants_map_to_the_wire_statuses() {
        assert_eq!(
            status_of(ApiError::MissingField(String::from("subject"))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ApiError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApiError::Internal(String::from("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! HTTP-facing error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use salesdash_common::DashError;
use tracing::error;

/// Errors that turn into an HTTP response.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// Any dashboard error.
    #[error(transparent)]
    Dash(#[from] DashError),
}

impl From<askama::Error> for ServerError {
    fn from(err: askama::Error) -> Self {
        Self::Dash(DashError::template(err.to_string()))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Result type for request handlers.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_template_failure_is_internal_error() {
        let err = ServerError::from(askama::Error::Fmt(std::fmt::Error));
        assert!(matches!(err, ServerError::Dash(DashError::Template { .. })));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).starts_with("Template error:"));
    }
}

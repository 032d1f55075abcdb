//! Request-level middleware.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Enforce a per-request deadline.
///
/// The inner service is dropped once `deadline` elapses and the client gets
/// [`AppError::Timeout`] as a JSON error body.
pub async fn request_deadline(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(?deadline, "Request deadline exceeded");
            AppError::Timeout.into_response()
        }
    }
}

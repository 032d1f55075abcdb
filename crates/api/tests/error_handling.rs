//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need a database --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::header::ALLOW;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use filmcat_api::error::AppError;
use filmcat_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Filmwork",
        id: "42".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Filmwork with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::PageOutOfRange maps to a 4xx, never clamped
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_out_of_range_returns_404() {
    let err = AppError::Core(CoreError::PageOutOfRange {
        page: 4,
        total_pages: 3,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "PAGE_OUT_OF_RANGE");
    assert_eq!(json["error"], "Page 4 is out of range (total pages: 3)");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("bad role".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad role");
}

// ---------------------------------------------------------------------------
// Test: MethodNotAllowed maps to 405 with an Allow header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn method_not_allowed_returns_405_with_allow_header() {
    let response = AppError::MethodNotAllowed.into_response();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[ALLOW], "GET, HEAD");

    let (status, json) = error_to_response(AppError::MethodNotAllowed).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
}

// ---------------------------------------------------------------------------
// Test: an expired request deadline maps to a structured 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_returns_503_with_json_body() {
    let (status, json) = error_to_response(AppError::Timeout).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "REQUEST_TIMEOUT");
}

// ---------------------------------------------------------------------------
// Test: sqlx errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pool_timeout_returns_503() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn closed_pool_and_io_failures_return_503() {
    let refused = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
    for err in [sqlx::Error::PoolClosed, sqlx::Error::Io(refused)] {
        let (status, json) = error_to_response(AppError::Database(err)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["code"], "STORE_UNAVAILABLE");
        assert_eq!(json["error"], "The catalog store is unavailable");
    }
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let err = AppError::Database(sqlx::Error::Protocol("unexpected message".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

//! Behaviour when the catalog store cannot be reached.
//!
//! The router is built over a lazy pool pointing at a port nothing listens
//! on, so every connection attempt is refused. No database is required.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, test_config};
use filmcat_api::router::build_app_router;
use filmcat_api::state::AppState;
use uuid::Uuid;

/// Build the full router over a pool whose connections always fail.
fn unreachable_store_app() -> Router {
    let pool = filmcat_db::pool_options(2, Duration::from_millis(500))
        .connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .unwrap();

    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

async fn get_within_deadline(uri: &str) -> axum::http::Response<axum::body::Body> {
    tokio::time::timeout(Duration::from_secs(10), get(unreachable_store_app(), uri))
        .await
        .expect("store failure must be reported before the request deadline")
}

// ---------------------------------------------------------------------------
// Test: read endpoints report STORE_UNAVAILABLE as a structured 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_reports_store_unavailable() {
    let response = get_within_deadline("/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert_eq!(json["error"], "The catalog store is unavailable");
}

#[tokio::test]
async fn detail_reports_store_unavailable() {
    let response = get_within_deadline(&format!("/api/v1/movies/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "STORE_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Test: health reports the same condition
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_is_degraded_when_store_is_unreachable() {
    let response = get_within_deadline("/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store"], "unavailable");
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
}

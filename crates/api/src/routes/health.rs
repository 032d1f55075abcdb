//! Liveness and catalog store reachability.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::STORE_UNAVAILABLE;
use crate::state::AppState;

/// Reachability of the catalog store as seen by one `SELECT 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Available,
    Unavailable,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreStatus,
    /// Same error code the read endpoints use for an unreachable store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// GET /health
///
/// 200 while the catalog store is reachable, 503 with `STORE_UNAVAILABLE`
/// otherwise. Never reads catalog rows.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match filmcat_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                store: StoreStatus::Available,
                code: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the catalog store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    store: StoreStatus::Unavailable,
                    code: Some(STORE_UNAVAILABLE),
                }),
            )
        }
    }
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

//! Route definitions for filmworks.

use axum::routing::get;
use axum::Router;

use crate::handlers::filmwork;
use crate::state::AppState;

/// Routes mounted at `/movies` (and its `/filmworks` alias).
///
/// ```text
/// GET    /          -> list
/// GET    /{id}      -> get_by_id
/// *      /, /{id}   -> 405 method_not_allowed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(filmwork::list).fallback(filmwork::method_not_allowed),
        )
        .route(
            "/{id}",
            get(filmwork::get_by_id).fallback(filmwork::method_not_allowed),
        )
}

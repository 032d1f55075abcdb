pub mod filmwork;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                 list (paginated)
/// /movies/{id}            detail
///
/// /filmworks              alias of /movies
/// /filmworks/{id}         alias of /movies/{id}
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", filmwork::router())
        .nest("/filmworks", filmwork::router())
}

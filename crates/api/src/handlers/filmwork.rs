//! Handlers for the `/movies` resource.
//!
//! Read-only views over the aggregated filmwork projection.

use axum::extract::{Path, State};
use axum::Json;
use filmcat_core::error::CoreError;
use filmcat_core::pagination::PageWindow;
use filmcat_db::models::filmwork::AggregatedFilmwork;
use filmcat_db::repositories::FilmworkRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::PageParam;
use crate::response::PageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies?page=1
///
/// List aggregated filmworks ordered by title and creation date, 50 per page.
pub async fn list(
    State(state): State<AppState>,
    PageParam(page): PageParam,
) -> AppResult<Json<PageResponse<AggregatedFilmwork>>> {
    let mut tx = FilmworkRepo::begin_read(&state.pool).await?;
    let count = FilmworkRepo::count(&mut tx).await?;
    let window = PageWindow::new(count, page)?;
    let results = FilmworkRepo::list_page(&mut tx, &window).await?;
    tx.commit().await?;

    tracing::debug!(
        page = window.number,
        total_pages = window.total_pages,
        count,
        "Listed filmworks"
    );

    Ok(Json(PageResponse::new(&window, results)))
}

/// GET /api/v1/movies/{id}
///
/// Get a single aggregated filmwork. Ids that are not UUIDs cannot match
/// any row and are reported as not found.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<AggregatedFilmwork>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Filmwork",
            id: raw_id.clone(),
        })
    };

    let id = Uuid::parse_str(&raw_id).map_err(|_| not_found())?;
    let filmwork = FilmworkRepo::find_aggregated_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(filmwork))
}

/// Any non-GET method on a filmwork route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

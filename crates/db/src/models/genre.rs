//! Genre junction rows.

use filmcat_core::aggregation::GenreLink;
use filmcat_core::types::DbId;
use sqlx::FromRow;

/// A `content.genre_film_work` row joined to `content.genre.name`.
#[derive(Debug, Clone, FromRow)]
pub struct GenreLinkRow {
    pub film_work_id: DbId,
    pub name: String,
}

impl From<GenreLinkRow> for GenreLink {
    fn from(row: GenreLinkRow) -> Self {
        GenreLink {
            film_work_id: row.film_work_id,
            name: row.name,
        }
    }
}

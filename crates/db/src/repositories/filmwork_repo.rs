//! Read-only repository for `content.film_work` and its junction tables.
//!
//! Every aggregated read is an explicit plan of at most three statements:
//!
//! 1. select the filmwork rows (by id, or one page window), in canonical order
//! 2. select the genre links for exactly those ids
//! 3. select the person links for exactly those ids, keyed by role
//!
//! The link rows are folded into name sets by
//! [`filmcat_core::aggregation::group_credits`] and re-attached in step-1 order.

use filmcat_core::aggregation::{group_credits, GenreLink, PersonLink};
use filmcat_core::pagination::{PageWindow, PAGE_SIZE};
use filmcat_core::types::DbId;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::models::filmwork::{AggregatedFilmwork, FilmworkRow};
use crate::models::genre::GenreLinkRow;
use crate::models::person::PersonLinkRow;

/// Column list for the `film_work` table (aliased `fw`).
const COLUMNS: &str = "fw.id, fw.title, fw.description, fw.creation_date, fw.rating, \
    fw.type AS film_type";

/// Canonical ordering. `id` breaks ties so pages never overlap.
const ORDER_BY: &str = "fw.title, fw.creation_date, fw.id";

/// Provides aggregated read access to filmworks.
pub struct FilmworkRepo;

impl FilmworkRepo {
    /// Open a read-only snapshot so a count and the page it sizes agree.
    pub async fn begin_read(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }

    /// Total number of filmworks.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM content.film_work")
            .fetch_one(conn)
            .await
    }

    /// The aggregated filmworks falling on `window`, in canonical order.
    pub async fn list_page(
        conn: &mut PgConnection,
        window: &PageWindow,
    ) -> Result<Vec<AggregatedFilmwork>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content.film_work fw \
             ORDER BY {ORDER_BY} \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, FilmworkRow>(&query)
            .bind(PAGE_SIZE)
            .bind(window.offset())
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(
            page = window.number,
            offset = window.offset(),
            rows = rows.len(),
            "Fetched filmwork page"
        );

        Self::aggregate(conn, rows).await
    }

    /// Find one aggregated filmwork by id.
    pub async fn find_aggregated_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AggregatedFilmwork>, sqlx::Error> {
        let mut tx = Self::begin_read(pool).await?;

        let query = format!("SELECT {COLUMNS} FROM content.film_work fw WHERE fw.id = $1");
        let row = sqlx::query_as::<_, FilmworkRow>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let found = match row {
            Some(row) => Self::aggregate(&mut *tx, vec![row]).await?.pop(),
            None => None,
        };

        tx.commit().await?;
        Ok(found)
    }

    // -----------------------------------------------------------------------
    // Junction lookups
    // -----------------------------------------------------------------------

    /// Genre names linked to any of `film_work_ids`.
    pub async fn genre_links(
        conn: &mut PgConnection,
        film_work_ids: &[DbId],
    ) -> Result<Vec<GenreLinkRow>, sqlx::Error> {
        sqlx::query_as::<_, GenreLinkRow>(
            "SELECT gfw.film_work_id, g.name \
             FROM content.genre_film_work gfw \
             JOIN content.genre g ON g.id = gfw.genre_id \
             WHERE gfw.film_work_id = ANY($1)",
        )
        .bind(film_work_ids)
        .fetch_all(conn)
        .await
    }

    /// Person names and roles linked to any of `film_work_ids`.
    pub async fn person_links(
        conn: &mut PgConnection,
        film_work_ids: &[DbId],
    ) -> Result<Vec<PersonLinkRow>, sqlx::Error> {
        sqlx::query_as::<_, PersonLinkRow>(
            "SELECT pfw.film_work_id, pfw.role, p.full_name \
             FROM content.person_film_work pfw \
             JOIN content.person p ON p.id = pfw.person_id \
             WHERE pfw.film_work_id = ANY($1) \
             ORDER BY pfw.role",
        )
        .bind(film_work_ids)
        .fetch_all(conn)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Attach grouped credits to `rows`, preserving their order.
    async fn aggregate(
        conn: &mut PgConnection,
        rows: Vec<FilmworkRow>,
    ) -> Result<Vec<AggregatedFilmwork>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let genres = Self::genre_links(&mut *conn, &ids).await?;
        let people = Self::person_links(&mut *conn, &ids)
            .await?
            .into_iter()
            .map(PersonLink::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut credits = group_credits(&ids, genres.into_iter().map(GenreLink::from), people);

        rows.into_iter()
            .map(|row| {
                let entry = credits.remove(&row.id).unwrap_or_default();
                row.into_aggregated(entry)
            })
            .collect()
    }
}

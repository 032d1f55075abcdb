//! Filmwork row model and its aggregated read projection.

use chrono::NaiveDate;
use filmcat_core::aggregation::Credits;
use filmcat_core::catalog::FilmworkType;
use filmcat_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use super::decode_text_column;

/// The `content.film_work` columns exposed by the read API.
///
/// `file_path` and the timestamps are deliberately not selected.
#[derive(Debug, Clone, FromRow)]
pub struct FilmworkRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub rating: f64,
    /// Raw `type` column, aliased because `type` is a Rust keyword.
    pub film_type: String,
}

impl FilmworkRow {
    /// Combine the row with its grouped credits.
    pub fn into_aggregated(self, credits: Credits) -> Result<AggregatedFilmwork, sqlx::Error> {
        let film_type = decode_text_column("type", &self.film_type)?;
        Ok(AggregatedFilmwork {
            id: self.id,
            title: self.title,
            description: self.description,
            creation_date: self.creation_date,
            rating: self.rating,
            film_type,
            credits,
        })
    }
}

/// A filmwork with its genre names and role-partitioned person names.
///
/// Serializes to the flat JSON object returned by both the list and the
/// detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedFilmwork {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub rating: f64,
    #[serde(rename = "type")]
    pub film_type: FilmworkType,
    #[serde(flatten)]
    pub credits: Credits,
}

//! Person junction rows.

use filmcat_core::aggregation::PersonLink;
use filmcat_core::types::DbId;
use sqlx::FromRow;

use super::decode_text_column;

/// A `content.person_film_work` row joined to `content.person.full_name`.
#[derive(Debug, Clone, FromRow)]
pub struct PersonLinkRow {
    pub film_work_id: DbId,
    pub role: String,
    pub full_name: String,
}

impl TryFrom<PersonLinkRow> for PersonLink {
    type Error = sqlx::Error;

    fn try_from(row: PersonLinkRow) -> Result<Self, Self::Error> {
        Ok(PersonLink {
            film_work_id: row.film_work_id,
            role: decode_text_column("role", &row.role)?,
            full_name: row.full_name,
        })
    }
}

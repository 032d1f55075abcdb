//! Row models for the `content` schema.
//!
//! Each submodule contains `FromRow` structs matching the columns the
//! repositories select, plus conversions into `filmcat_core` domain values.
//! Enum-valued columns are read as text and parsed into closed enums here.

pub mod filmwork;
pub mod genre;
pub mod person;

use std::str::FromStr;

use filmcat_core::error::CoreError;

/// Parse a text column into a closed enum, reporting failures as a column
/// decode error so they surface like any other malformed row.
pub(crate) fn decode_text_column<T>(column: &str, raw: &str) -> Result<T, sqlx::Error>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse().map_err(|e: CoreError| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

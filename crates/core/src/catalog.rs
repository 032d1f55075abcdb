//! Closed vocabularies of the filmwork catalog.
//!
//! Both enums are stored as text in the database. The string forms here must
//! match the `CHECK` constraints in `20240101000001_create_content_schema.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Filmwork type
// ---------------------------------------------------------------------------

/// Kind of a filmwork record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmworkType {
    #[default]
    Movie,
    TvShow,
}

impl FilmworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvShow => "tv_show",
        }
    }
}

impl FromStr for FilmworkType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv_show" => Ok(Self::TvShow),
            other => Err(CoreError::Validation(format!(
                "Unknown filmwork type '{other}'. Expected 'movie' or 'tv_show'"
            ))),
        }
    }
}

impl fmt::Display for FilmworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Person role
// ---------------------------------------------------------------------------

/// Capacity in which a person is credited on a filmwork.
///
/// The same person may hold several roles on one filmwork, one junction row
/// per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Actor,
    Writer,
    Director,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Actor, Role::Writer, Role::Director];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Writer => "writer",
            Self::Director => "director",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(Self::Actor),
            "writer" => Ok(Self::Writer),
            "director" => Ok(Self::Director),
            other => Err(CoreError::Validation(format!(
                "Unknown role '{other}'. Expected 'actor', 'writer' or 'director'"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

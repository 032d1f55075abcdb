//! Grouping of junction links into per-filmwork name sets.
//!
//! The repository layer fetches the genre links and the person links of a set
//! of filmworks as flat rows. This module folds those rows into one
//! [`Credits`] value per filmwork: distinct genre names plus distinct person
//! names partitioned by [`Role`].
//!
//! Names within each set come out in lexicographic order, so repeated calls
//! against unchanged data serialize to identical JSON.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::catalog::Role;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Input rows
// ---------------------------------------------------------------------------

/// One `genre_film_work` row joined to its genre name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreLink {
    pub film_work_id: DbId,
    pub name: String,
}

/// One `person_film_work` row joined to the person's full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonLink {
    pub film_work_id: DbId,
    pub role: Role,
    pub full_name: String,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Denormalized credits of a single filmwork.
///
/// All four fields are always present; a filmwork without links in a
/// category has an empty list there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credits {
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}

#[derive(Debug, Default)]
struct NameSets {
    genres: BTreeSet<String>,
    actors: BTreeSet<String>,
    directors: BTreeSet<String>,
    writers: BTreeSet<String>,
}

impl NameSets {
    fn role_mut(&mut self, role: Role) -> &mut BTreeSet<String> {
        match role {
            Role::Actor => &mut self.actors,
            Role::Writer => &mut self.writers,
            Role::Director => &mut self.directors,
        }
    }

    fn into_credits(self) -> Credits {
        Credits {
            genres: self.genres.into_iter().collect(),
            actors: self.actors.into_iter().collect(),
            directors: self.directors.into_iter().collect(),
            writers: self.writers.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Fold genre and person links into a [`Credits`] entry per requested id.
///
/// - Every id in `film_work_ids` gets an entry, even without any links.
/// - Duplicate names collapse within one filmwork; the same name may appear
///   on many filmworks.
/// - Links pointing at ids outside `film_work_ids` are ignored.
pub fn group_credits<G, P>(
    film_work_ids: &[DbId],
    genre_links: G,
    person_links: P,
) -> HashMap<DbId, Credits>
where
    G: IntoIterator<Item = GenreLink>,
    P: IntoIterator<Item = PersonLink>,
{
    let mut sets: HashMap<DbId, NameSets> = film_work_ids
        .iter()
        .map(|id| (*id, NameSets::default()))
        .collect();

    for link in genre_links {
        if let Some(entry) = sets.get_mut(&link.film_work_id) {
            entry.genres.insert(link.name);
        }
    }

    for link in person_links {
        if let Some(entry) = sets.get_mut(&link.film_work_id) {
            entry.role_mut(link.role).insert(link.full_name);
        }
    }

    sets.into_iter()
        .map(|(id, names)| (id, names.into_credits()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

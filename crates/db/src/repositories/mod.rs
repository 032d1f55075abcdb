//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&PgPool` or `&mut PgConnection` as the first argument.

pub mod filmwork_repo;

pub use filmwork_repo::FilmworkRepo;

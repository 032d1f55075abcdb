#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: i64, total_pages: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// All catalog primary keys are PostgreSQL UUIDs.
pub type DbId = uuid::Uuid;

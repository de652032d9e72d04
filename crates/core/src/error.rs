use crate::types::DbId;

/// Domain-level errors shared by repositories, services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One message per violated rule, in the order the rules were checked.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

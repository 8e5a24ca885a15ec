use crate::types::DbId;

/// Domain-level error kinds for the voting store.
///
/// All variants except `Internal` are caller errors; the HTTP layer maps
/// them to client-facing statuses. `Internal` covers storage-engine
/// failures and is never surfaced with its raw message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Already voted for presentation {presentation_id}")]
    AlreadyVoted { presentation_id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}

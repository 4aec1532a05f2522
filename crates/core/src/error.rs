use crate::types::DbId;

/// Domain failures detected before or after a database lookup.
///
/// Database faults themselves are not represented here; they stay as
/// `sqlx::Error` until the HTTP layer classifies them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The id is well-formed but no record has it.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Client input broke a rule; the message names the rule.
    #[error("Validation failed: {0}")]
    Validation(String),
}

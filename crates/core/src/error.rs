use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more per-field rules rejected the input.
    #[error("Validation failed: {}", summarize(.0))]
    InvalidFields(Vec<FieldViolation>),

    /// A caller-supplied end date precedes the server-assigned start date.
    #[error("{field} should not be earlier than {reference}")]
    DateOrder {
        field: &'static str,
        reference: &'static str,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

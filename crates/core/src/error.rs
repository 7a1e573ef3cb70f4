use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A listing, search, or quiz pool came back empty.
    #[error("No results: {0}")]
    NoResults(&'static str),

    #[error("Unprocessable input: {0}")]
    Unprocessable(String),
}

use crate::storage::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors surfaced by [`PromptRepository`](crate::repository::PromptRepository).
///
/// A missing prompt is not an error; lookups return `None` instead.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

use crate::modules::books::core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("book not found: {0}")]
    NotFound(String),

    #[error("repository failure: {0}")]
    Repository(#[from] anyhow::Error),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

use crate::application::ports::InferenceError;
use crate::domain::repositories::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat not found: {0}")]
    NotFound(String),
    #[error("Not allowed to access chat {0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Backend(#[from] InferenceError),
}

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("{0}")]
    Validation(String),
    #[error("PDF not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Backend(#[from] InferenceError),
}

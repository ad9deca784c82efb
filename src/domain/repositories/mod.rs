pub mod chat_pdf_repository;
pub mod chat_repository;
pub mod message_repository;

pub use chat_pdf_repository::ChatPdfRepository;
pub use chat_repository::ChatRepository;
pub use message_repository::MessageRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::ChatPdfLink;

#[async_trait]
pub trait ChatPdfRepository: Send + Sync {
    async fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<ChatPdfLink>, RepositoryError>;

    /// Adding an existing link is a no-op.
    async fn add(&self, link: &ChatPdfLink) -> Result<(), RepositoryError>;

    async fn remove(&self, chat_id: &str, pdf_id: &str) -> Result<bool, RepositoryError>;

    /// Replaces the chat's whole link set atomically: readers see either the
    /// old set or the new one.
    async fn replace(&self, chat_id: &str, links: &[ChatPdfLink]) -> Result<(), RepositoryError>;
}

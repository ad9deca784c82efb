use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::Chat;

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Chat>, RepositoryError>;

    /// Inserts the chat unless a row with the same id already exists.
    /// Returns `true` when this call created it.
    async fn save_if_absent(&self, chat: &Chat) -> Result<bool, RepositoryError>;
}

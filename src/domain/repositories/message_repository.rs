use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::Message;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn save_all(&self, messages: &[Message]) -> Result<(), RepositoryError>;
    async fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<Message>, RepositoryError>;
}

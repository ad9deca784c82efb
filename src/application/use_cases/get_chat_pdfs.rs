use std::sync::Arc;

use super::get_chat::readable_chat;
use crate::application::errors::ChatError;
use crate::domain::repositories::{ChatPdfRepository, ChatRepository};

pub struct GetChatPdfsUseCase {
    chat_repository: Arc<dyn ChatRepository>,
    chat_pdf_repository: Arc<dyn ChatPdfRepository>,
}

impl GetChatPdfsUseCase {
    pub fn new(
        chat_repository: Arc<dyn ChatRepository>,
        chat_pdf_repository: Arc<dyn ChatPdfRepository>,
    ) -> Self {
        Self {
            chat_repository,
            chat_pdf_repository,
        }
    }

    pub async fn execute(&self, chat_id: &str, user_id: &str) -> Result<Vec<String>, ChatError> {
        readable_chat(self.chat_repository.as_ref(), chat_id, user_id).await?;

        let links = self.chat_pdf_repository.find_by_chat_id(chat_id).await?;
        Ok(links
            .into_iter()
            .map(|link| link.pdf_id().to_string())
            .collect())
    }
}

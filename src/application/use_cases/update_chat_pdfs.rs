use std::sync::Arc;
use tracing::info;

use crate::application::errors::ChatError;
use crate::application::services::selection::resolve_candidates;
use crate::domain::entities::ChatPdfLink;
use crate::domain::repositories::{ChatPdfRepository, ChatRepository};

/// Add, remove and replace operations on a chat's PDF links. All of them
/// require the caller to own the chat, public or not.
pub struct UpdateChatPdfsUseCase {
    chat_repository: Arc<dyn ChatRepository>,
    chat_pdf_repository: Arc<dyn ChatPdfRepository>,
}

impl UpdateChatPdfsUseCase {
    pub fn new(
        chat_repository: Arc<dyn ChatRepository>,
        chat_pdf_repository: Arc<dyn ChatPdfRepository>,
    ) -> Self {
        Self {
            chat_repository,
            chat_pdf_repository,
        }
    }

    pub async fn add(&self, chat_id: &str, user_id: &str, pdf_id: &str) -> Result<(), ChatError> {
        self.authorize(chat_id, user_id).await?;
        let pdf_id = non_empty_pdf_id(pdf_id)?;

        self.chat_pdf_repository
            .add(&ChatPdfLink::new(chat_id.to_string(), pdf_id))
            .await?;
        Ok(())
    }

    pub async fn remove(
        &self,
        chat_id: &str,
        user_id: &str,
        pdf_id: &str,
    ) -> Result<(), ChatError> {
        self.authorize(chat_id, user_id).await?;

        let removed = self.chat_pdf_repository.remove(chat_id, pdf_id).await?;
        if !removed {
            info!(chat_id, pdf_id, "PDF was not linked to chat");
        }
        Ok(())
    }

    pub async fn replace(
        &self,
        chat_id: &str,
        user_id: &str,
        pdf_ids: Vec<String>,
    ) -> Result<(), ChatError> {
        self.authorize(chat_id, user_id).await?;

        let links: Vec<ChatPdfLink> = resolve_candidates(pdf_ids, None)
            .into_iter()
            .map(|pdf_id| ChatPdfLink::new(chat_id.to_string(), pdf_id))
            .collect();
        self.chat_pdf_repository.replace(chat_id, &links).await?;
        info!(chat_id, count = links.len(), "Replaced chat PDF selection");
        Ok(())
    }

    async fn authorize(&self, chat_id: &str, user_id: &str) -> Result<(), ChatError> {
        let chat = self
            .chat_repository
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| ChatError::NotFound(chat_id.to_string()))?;

        if !chat.is_modifiable_by(user_id) {
            return Err(ChatError::Forbidden(chat_id.to_string()));
        }
        Ok(())
    }
}

fn non_empty_pdf_id(pdf_id: &str) -> Result<String, ChatError> {
    let pdf_id = pdf_id.trim();
    if pdf_id.is_empty() {
        return Err(ChatError::Validation("pdfId must not be empty".to_string()));
    }
    Ok(pdf_id.to_string())
}

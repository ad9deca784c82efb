use std::sync::Arc;

use crate::application::errors::ChatError;
use crate::domain::entities::{Chat, Message};
use crate::domain::repositories::{ChatRepository, MessageRepository};

#[derive(Debug, Clone)]
pub struct GetChatRequest {
    pub chat_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct GetChatResponse {
    pub chat: Chat,
    pub messages: Vec<Message>,
}

pub struct GetChatUseCase {
    chat_repository: Arc<dyn ChatRepository>,
    message_repository: Arc<dyn MessageRepository>,
}

impl GetChatUseCase {
    pub fn new(
        chat_repository: Arc<dyn ChatRepository>,
        message_repository: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            chat_repository,
            message_repository,
        }
    }

    pub async fn execute(&self, request: GetChatRequest) -> Result<GetChatResponse, ChatError> {
        let chat = readable_chat(
            self.chat_repository.as_ref(),
            &request.chat_id,
            &request.user_id,
        )
        .await?;
        let messages = self
            .message_repository
            .find_by_chat_id(&request.chat_id)
            .await?;

        Ok(GetChatResponse { chat, messages })
    }
}

/// Loads a chat the user may read: the owner, or anyone if it is public.
pub(crate) async fn readable_chat(
    chat_repository: &dyn ChatRepository,
    chat_id: &str,
    user_id: &str,
) -> Result<Chat, ChatError> {
    let chat = chat_repository
        .find_by_id(chat_id)
        .await?
        .ok_or_else(|| ChatError::NotFound(chat_id.to_string()))?;

    if !chat.is_readable_by(user_id) {
        return Err(ChatError::Forbidden(chat_id.to_string()));
    }
    Ok(chat)
}

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::errors::ChatError;
use crate::application::ports::InferenceBackend;
use crate::application::ports::inference_backend::QueryRequest;
use crate::application::services::ModelCatalog;
use crate::application::services::relay::format_with_sources;
use crate::application::services::selection::{ChatMode, NO_CONTEXT_WARNING, resolve_candidates};
use crate::domain::entities::{Chat, Message};
use crate::domain::repositories::{ChatPdfRepository, ChatRepository, MessageRepository};
use crate::domain::value_objects::{MessagePart, Source, Visibility};

#[derive(Debug, Clone)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub user_id: String,
    pub message_id: Option<String>,
    pub text: String,
    /// The inbound message parts, stored untouched.
    pub parts: serde_json::Value,
    pub selected_model: Option<String>,
    pub visibility: Visibility,
    pub selected_pdf_ids: Option<Vec<String>>,
}

/// A completed turn, ready to be relayed to the client.
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    pub chat_created: bool,
    pub mode: ChatMode,
    pub model: Option<String>,
    pub reasoning_steps: Vec<String>,
    pub sources: Vec<Source>,
    pub text: String,
    pub assistant_message_id: String,
}

pub struct SendMessageUseCase {
    chat_repository: Arc<dyn ChatRepository>,
    message_repository: Arc<dyn MessageRepository>,
    chat_pdf_repository: Arc<dyn ChatPdfRepository>,
    backend: Arc<dyn InferenceBackend>,
    model_catalog: Arc<ModelCatalog>,
}

impl SendMessageUseCase {
    pub fn new(
        chat_repository: Arc<dyn ChatRepository>,
        message_repository: Arc<dyn MessageRepository>,
        chat_pdf_repository: Arc<dyn ChatPdfRepository>,
        backend: Arc<dyn InferenceBackend>,
        model_catalog: Arc<ModelCatalog>,
    ) -> Self {
        Self {
            chat_repository,
            message_repository,
            chat_pdf_repository,
            backend,
            model_catalog,
        }
    }

    pub async fn execute(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, ChatError> {
        if request.text.is_empty() {
            return Err(ChatError::Validation(
                "No text content found in message".to_string(),
            ));
        }

        let chat_created = self.ensure_chat(&request).await?;

        let user_message = Message::user(
            request.message_id.clone(),
            request.chat_id.clone(),
            request.text.clone(),
            request.parts.clone(),
        );
        self.message_repository.save_all(&[user_message]).await?;
        debug!(chat_id = %request.chat_id, "Saved user message");

        let persisted: Vec<String> = self
            .chat_pdf_repository
            .find_by_chat_id(&request.chat_id)
            .await?
            .into_iter()
            .map(|link| link.pdf_id().to_string())
            .collect();
        let candidates = resolve_candidates(persisted, request.selected_pdf_ids.clone());
        let mode = ChatMode::decide(&request.text, candidates);
        info!(chat_id = %request.chat_id, mode = mode.as_str(), "Resolved chat mode");

        let (model, reasoning_steps, sources, text) = if mode.calls_backend() {
            let model = match request.selected_model.clone() {
                Some(model) if !model.is_empty() => model,
                _ => self.model_catalog.default_model().await,
            };

            let response = self
                .backend
                .query(QueryRequest {
                    question: request.text.clone(),
                    model: model.clone(),
                    session_id: None,
                    pdf_ids: mode.pdf_filter(),
                })
                .await?;
            info!(
                chat_id = %request.chat_id,
                model = %model,
                answer_len = response.answer.len(),
                sources = response.sources.len(),
                reasoning_steps = response.reasoning_steps().len(),
                "Received backend answer"
            );

            let reasoning_steps = response.reasoning_steps().to_vec();
            match mode {
                ChatMode::Rag { .. } => {
                    let text = format_with_sources(&response.answer, &response.sources);
                    (Some(model), reasoning_steps, response.sources, text)
                }
                _ => (Some(model), reasoning_steps, Vec::new(), response.answer),
            }
        } else {
            (None, Vec::new(), Vec::new(), NO_CONTEXT_WARNING.to_string())
        };

        let mut parts = Vec::new();
        if !reasoning_steps.is_empty() {
            parts.push(MessagePart::reasoning(&reasoning_steps));
        }
        if !sources.is_empty() {
            parts.push(MessagePart::DataSources {
                data: sources.clone(),
            });
        }
        parts.push(MessagePart::text(text.clone()));

        let assistant_message = Message::assistant(request.chat_id.clone(), text.clone(), parts);
        let assistant_message_id = assistant_message.id().to_string();
        self.message_repository.save_all(&[assistant_message]).await?;
        debug!(chat_id = %request.chat_id, message_id = %assistant_message_id, "Saved assistant message");

        Ok(SendMessageResponse {
            chat_created,
            mode,
            model,
            reasoning_steps,
            sources,
            text,
            assistant_message_id,
        })
    }

    async fn ensure_chat(&self, request: &SendMessageRequest) -> Result<bool, ChatError> {
        if let Some(chat) = self.chat_repository.find_by_id(&request.chat_id).await? {
            if !chat.is_modifiable_by(&request.user_id) {
                return Err(ChatError::Forbidden(request.chat_id.clone()));
            }
            return Ok(false);
        }

        let chat = Chat::from_first_question(
            request.chat_id.clone(),
            request.user_id.clone(),
            &request.text,
            request.visibility,
        );
        if self.chat_repository.save_if_absent(&chat).await? {
            info!(chat_id = %request.chat_id, "Created new chat");
            return Ok(true);
        }

        // Another request created the chat first; its owner decides.
        let existing = self
            .chat_repository
            .find_by_id(&request.chat_id)
            .await?
            .ok_or_else(|| ChatError::NotFound(request.chat_id.clone()))?;
        if !existing.is_modifiable_by(&request.user_id) {
            return Err(ChatError::Forbidden(request.chat_id.clone()));
        }
        Ok(false)
    }
}

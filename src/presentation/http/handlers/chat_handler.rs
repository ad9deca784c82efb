use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};

use crate::application::ChatError;
use crate::application::ports::AuthProvider;
use crate::application::services::{RelayPacing, relay};
use crate::application::use_cases::{
    GetChatUseCase, SendMessageUseCase, get_chat::GetChatRequest,
    send_message::SendMessageRequest,
};
use crate::domain::value_objects::Visibility;
use crate::presentation::http::auth::require_session;
use crate::presentation::http::dto::{ChatHistoryDto, PostChatRequestDto};
use crate::presentation::http::errors::AppError;
use crate::presentation::http::handlers::sse_handler::relay_response;

pub struct ChatHandler {
    send_message_use_case: Arc<SendMessageUseCase>,
    get_chat_use_case: Arc<GetChatUseCase>,
    auth_provider: Arc<dyn AuthProvider>,
    pacing: RelayPacing,
}

impl ChatHandler {
    pub fn new(
        send_message_use_case: Arc<SendMessageUseCase>,
        get_chat_use_case: Arc<GetChatUseCase>,
        auth_provider: Arc<dyn AuthProvider>,
        pacing: RelayPacing,
    ) -> Self {
        Self {
            send_message_use_case,
            get_chat_use_case,
            auth_provider,
            pacing,
        }
    }

    /// Runs one chat turn and streams the reply. Request problems are
    /// plain error responses; failures after validation are relayed
    /// in-stream so the client still renders an assistant message.
    pub async fn post_chat(
        State(handler): State<Arc<ChatHandler>>,
        headers: HeaderMap,
        body: Result<Json<PostChatRequestDto>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let session = require_session(handler.auth_provider.as_ref(), &headers).await?;
        let Json(body) = body?;

        let text = body.message.text_content().ok_or_else(|| {
            AppError::BadInput("No text content found in message".to_string())
        })?;
        let visibility = match body.selected_visibility_type.as_deref() {
            Some(raw) => Visibility::from_string(raw).map_err(AppError::BadInput)?,
            None => Visibility::default(),
        };

        let request = SendMessageRequest {
            chat_id: body.id,
            user_id: session.user_id,
            message_id: body.message.id,
            text,
            parts: serde_json::Value::Array(body.message.parts),
            selected_model: body.selected_chat_model,
            visibility,
            selected_pdf_ids: body.selected_pdf_ids,
        };
        let chat_id = request.chat_id.clone();

        let steps = match handler.send_message_use_case.execute(request).await {
            Ok(response) => {
                info!(
                    chat_id = %chat_id,
                    mode = response.mode.as_str(),
                    model = response.model.as_deref().unwrap_or("none"),
                    chat_created = response.chat_created,
                    message_id = %response.assistant_message_id,
                    sources = response.sources.len(),
                    "Relaying answer"
                );
                relay::plan_answer(
                    &response.reasoning_steps,
                    &response.sources,
                    &response.text,
                    &handler.pacing,
                )
            }
            Err(
                e @ (ChatError::Forbidden(_) | ChatError::NotFound(_) | ChatError::Validation(_)),
            ) => return Err(e.into()),
            Err(e) => {
                error!(chat_id = %chat_id, error = %e, "Chat turn failed");
                relay::plan_failure(&e.to_string(), &handler.pacing)
            }
        };

        Ok(relay_response(steps))
    }

    pub async fn get_chat(
        State(handler): State<Arc<ChatHandler>>,
        Path(chat_id): Path<String>,
        headers: HeaderMap,
    ) -> Result<impl IntoResponse, AppError> {
        let session = require_session(handler.auth_provider.as_ref(), &headers).await?;

        let response = handler
            .get_chat_use_case
            .execute(GetChatRequest {
                chat_id,
                user_id: session.user_id,
            })
            .await?;

        Ok(Json(ChatHistoryDto::from(response)))
    }
}

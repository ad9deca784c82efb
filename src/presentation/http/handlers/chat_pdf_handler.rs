use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderMap,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::ports::AuthProvider;
use crate::application::use_cases::{GetChatPdfsUseCase, UpdateChatPdfsUseCase};
use crate::presentation::http::auth::require_session;
use crate::presentation::http::dto::{PdfIdDto, PdfIdsDto, SuccessDto};
use crate::presentation::http::errors::AppError;

/// Per-chat PDF selection: read by owner or anyone when public, mutated by
/// owner only.
pub struct ChatPdfHandler {
    get_chat_pdfs_use_case: Arc<GetChatPdfsUseCase>,
    update_chat_pdfs_use_case: Arc<UpdateChatPdfsUseCase>,
    auth_provider: Arc<dyn AuthProvider>,
}

impl ChatPdfHandler {
    pub fn new(
        get_chat_pdfs_use_case: Arc<GetChatPdfsUseCase>,
        update_chat_pdfs_use_case: Arc<UpdateChatPdfsUseCase>,
        auth_provider: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            get_chat_pdfs_use_case,
            update_chat_pdfs_use_case,
            auth_provider,
        }
    }

    pub async fn get_pdfs(
        State(handler): State<Arc<ChatPdfHandler>>,
        Path(chat_id): Path<String>,
        headers: HeaderMap,
    ) -> Result<impl IntoResponse, AppError> {
        let session = require_session(handler.auth_provider.as_ref(), &headers).await?;

        let pdf_ids = handler
            .get_chat_pdfs_use_case
            .execute(&chat_id, &session.user_id)
            .await?;

        Ok(Json(PdfIdsDto { pdf_ids }))
    }

    pub async fn add_pdf(
        State(handler): State<Arc<ChatPdfHandler>>,
        Path(chat_id): Path<String>,
        headers: HeaderMap,
        body: Result<Json<PdfIdDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let session = require_session(handler.auth_provider.as_ref(), &headers).await?;
        let Json(body) = body?;

        handler
            .update_chat_pdfs_use_case
            .add(&chat_id, &session.user_id, &body.pdf_id)
            .await?;

        Ok(Json(SuccessDto { success: true }))
    }

    pub async fn set_pdfs(
        State(handler): State<Arc<ChatPdfHandler>>,
        Path(chat_id): Path<String>,
        headers: HeaderMap,
        body: Result<Json<PdfIdsDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let session = require_session(handler.auth_provider.as_ref(), &headers).await?;
        let Json(body) = body?;

        handler
            .update_chat_pdfs_use_case
            .replace(&chat_id, &session.user_id, body.pdf_ids)
            .await?;

        Ok(Json(SuccessDto { success: true }))
    }

    pub async fn remove_pdf(
        State(handler): State<Arc<ChatPdfHandler>>,
        Path(chat_id): Path<String>,
        headers: HeaderMap,
        body: Result<Json<PdfIdDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let session = require_session(handler.auth_provider.as_ref(), &headers).await?;
        let Json(body) = body?;

        handler
            .update_chat_pdfs_use_case
            .remove(&chat_id, &session.user_id, &body.pdf_id)
            .await?;

        Ok(Json(SuccessDto { success: true }))
    }
}

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::ports::AuthProvider;
use crate::application::services::ModelCatalog;
use crate::application::use_cases::ManagePdfsUseCase;
use crate::presentation::http::auth::require_session;
use crate::presentation::http::dto::SuccessDto;
use crate::presentation::http::errors::AppError;

const UPLOAD_FIELD: &str = "file";

pub struct PdfHandler {
    manage_pdfs_use_case: Arc<ManagePdfsUseCase>,
    model_catalog: Arc<ModelCatalog>,
    auth_provider: Arc<dyn AuthProvider>,
}

impl PdfHandler {
    pub fn new(
        manage_pdfs_use_case: Arc<ManagePdfsUseCase>,
        model_catalog: Arc<ModelCatalog>,
        auth_provider: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            manage_pdfs_use_case,
            model_catalog,
            auth_provider,
        }
    }

    pub async fn list_pdfs(
        State(handler): State<Arc<PdfHandler>>,
        headers: HeaderMap,
    ) -> Result<impl IntoResponse, AppError> {
        require_session(handler.auth_provider.as_ref(), &headers).await?;

        let pdfs = handler.manage_pdfs_use_case.list().await?;
        Ok(Json(pdfs))
    }

    pub async fn upload_pdf(
        State(handler): State<Arc<PdfHandler>>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Result<impl IntoResponse, AppError> {
        require_session(handler.auth_provider.as_ref(), &headers).await?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadInput(e.to_string()))?
        {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let file_name = field
                .file_name()
                .ok_or_else(|| AppError::BadInput("Uploaded file has no name".to_string()))?
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadInput(e.to_string()))?
                .to_vec();

            let ack = handler.manage_pdfs_use_case.upload(file_name, data).await?;
            return Ok((StatusCode::CREATED, Json(ack)));
        }

        Err(AppError::BadInput("No file provided".to_string()))
    }

    pub async fn delete_pdf(
        State(handler): State<Arc<PdfHandler>>,
        Path(pdf_id): Path<String>,
        headers: HeaderMap,
    ) -> Result<impl IntoResponse, AppError> {
        require_session(handler.auth_provider.as_ref(), &headers).await?;

        handler.manage_pdfs_use_case.delete(&pdf_id).await?;
        Ok(Json(SuccessDto { success: true }))
    }

    pub async fn list_models(
        State(handler): State<Arc<PdfHandler>>,
        headers: HeaderMap,
    ) -> Result<impl IntoResponse, AppError> {
        require_session(handler.auth_provider.as_ref(), &headers).await?;

        Ok(Json(handler.model_catalog.available_models().await))
    }
}

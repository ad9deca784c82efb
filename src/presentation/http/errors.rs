use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::{ChatError, PdfError};
use crate::presentation::http::dto::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadInput(String),
    #[error("{0}")]
    BackendFailure(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::BadInput(_) => (StatusCode::BAD_REQUEST, "BAD_INPUT"),
            AppError::BackendFailure(_) => (StatusCode::BAD_GATEWAY, "BACKEND_FAILURE"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl From<ChatError> for AppError {
    fn from(error: ChatError) -> Self {
        match error {
            ChatError::NotFound(_) => AppError::NotFound(error.to_string()),
            ChatError::Forbidden(_) => AppError::Forbidden(error.to_string()),
            ChatError::Validation(msg) => AppError::BadInput(msg),
            ChatError::Repository(e) => AppError::Internal(e.to_string()),
            ChatError::Backend(e) => AppError::BackendFailure(e.to_string()),
        }
    }
}

impl From<PdfError> for AppError {
    fn from(error: PdfError) -> Self {
        match error {
            PdfError::Validation(msg) => AppError::BadInput(msg),
            PdfError::NotFound(_) => AppError::NotFound(error.to_string()),
            PdfError::Backend(e) => AppError::BackendFailure(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = match &self {
            AppError::BackendFailure(detail) => ApiResponse::<()>::error_with_details(
                code,
                "Inference backend request failed",
                detail.clone(),
            ),
            _ => ApiResponse::<()>::error(code, self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

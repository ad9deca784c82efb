use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

use crate::presentation::http::handlers::PdfHandler;

pub fn pdf_routes(pdf_handler: Arc<PdfHandler>) -> Router {
    Router::new()
        .route(
            "/api/pdfs",
            get(PdfHandler::list_pdfs).post(PdfHandler::upload_pdf),
        )
        .route("/api/pdfs/{pdf_id}", delete(PdfHandler::delete_pdf))
        .route("/api/models", get(PdfHandler::list_models))
        .with_state(pdf_handler)
}

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::{ChatHandler, ChatPdfHandler};

pub fn chat_routes(chat_handler: Arc<ChatHandler>) -> Router {
    Router::new()
        .route("/api/chat", post(ChatHandler::post_chat))
        .route("/api/chat/{id}", get(ChatHandler::get_chat))
        .with_state(chat_handler)
}

pub fn chat_pdf_routes(chat_pdf_handler: Arc<ChatPdfHandler>) -> Router {
    Router::new()
        .route(
            "/api/chat/{id}/pdfs",
            get(ChatPdfHandler::get_pdfs)
                .post(ChatPdfHandler::add_pdf)
                .put(ChatPdfHandler::set_pdfs)
                .delete(ChatPdfHandler::remove_pdf),
        )
        .with_state(chat_pdf_handler)
}

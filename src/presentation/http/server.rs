use axum::Router;
use axum::extract::DefaultBodyLimit;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::infrastructure::Container;
use crate::presentation::http::{
    handlers::{ChatHandler, ChatPdfHandler, PdfHandler},
    routes::{chat_pdf_routes, chat_routes, health_routes, pdf_routes},
};

const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

pub struct HttpServer {
    chat_handler: Arc<ChatHandler>,
    chat_pdf_handler: Arc<ChatPdfHandler>,
    pdf_handler: Arc<PdfHandler>,
    port: u16,
}

impl HttpServer {
    pub fn new(container: Container, port: u16) -> Self {
        Self {
            chat_handler: container.chat_handler,
            chat_pdf_handler: container.chat_pdf_handler,
            pdf_handler: container.pdf_handler,
            port,
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .merge(chat_routes(self.chat_handler.clone()))
            .merge(chat_pdf_routes(self.chat_pdf_handler.clone()))
            .merge(pdf_routes(self.pdf_handler.clone()))
            .layer(cors)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}

use std::sync::Arc;

use crate::{
    application::{
        ports::{AuthProvider, InferenceBackend},
        services::{ModelCatalog, RelayPacing},
        use_cases::{
            GetChatPdfsUseCase, GetChatUseCase, ManagePdfsUseCase, SendMessageUseCase,
            UpdateChatPdfsUseCase,
        },
    },
    domain::repositories::{ChatPdfRepository, ChatRepository, MessageRepository},
    infrastructure::{
        auth::{LocalAuthProvider, TokenAuthProvider},
        config::{AuthSettings, LOCAL_USER_ID, Settings},
        database::{
            create_connection_pool,
            connection::DatabaseError,
            repositories::{
                PostgresChatPdfRepository, PostgresChatRepository, PostgresMessageRepository,
            },
            run_migrations,
        },
        external_services::{InferenceClient, InferenceClientConfig},
    },
    presentation::http::handlers::{ChatHandler, ChatPdfHandler, PdfHandler},
};

#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("Failed to build inference client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// The ports the application runs against.
pub struct Dependencies {
    pub chat_repository: Arc<dyn ChatRepository>,
    pub message_repository: Arc<dyn MessageRepository>,
    pub chat_pdf_repository: Arc<dyn ChatPdfRepository>,
    pub backend: Arc<dyn InferenceBackend>,
    pub auth_provider: Arc<dyn AuthProvider>,
    pub default_chat_model: String,
    pub pacing: RelayPacing,
}

pub struct Container {
    pub chat_handler: Arc<ChatHandler>,
    pub chat_pdf_handler: Arc<ChatPdfHandler>,
    pub pdf_handler: Arc<PdfHandler>,
}

impl Container {
    /// Connects to Postgres, applies pending migrations and wires the
    /// production adapters.
    pub fn from_settings(settings: &Settings) -> Result<Self, ContainerError> {
        let db_pool = create_connection_pool(&settings.database_url, settings.db_pool_size)?;
        let applied = run_migrations(&db_pool)?;
        tracing::info!(applied, "Database migrations up to date");

        let backend: Arc<dyn InferenceBackend> =
            Arc::new(InferenceClient::new(InferenceClientConfig {
                base_url: settings.api_url.clone(),
                timeout: settings.backend_timeout,
            })?);

        let auth_provider: Arc<dyn AuthProvider> = match &settings.auth {
            AuthSettings::Local => Arc::new(LocalAuthProvider::new(LOCAL_USER_ID)),
            AuthSettings::Tokens(tokens) => Arc::new(TokenAuthProvider::new(tokens.clone())),
        };

        Ok(Self::assemble(Dependencies {
            chat_repository: Arc::new(PostgresChatRepository::new(db_pool.clone())),
            message_repository: Arc::new(PostgresMessageRepository::new(db_pool.clone())),
            chat_pdf_repository: Arc::new(PostgresChatPdfRepository::new(db_pool)),
            backend,
            auth_provider,
            default_chat_model: settings.default_chat_model.clone(),
            pacing: settings.pacing,
        }))
    }

    pub fn assemble(deps: Dependencies) -> Self {
        let model_catalog = Arc::new(ModelCatalog::new(
            deps.backend.clone(),
            deps.default_chat_model,
        ));

        // Use cases
        let send_message_use_case = Arc::new(SendMessageUseCase::new(
            deps.chat_repository.clone(),
            deps.message_repository.clone(),
            deps.chat_pdf_repository.clone(),
            deps.backend.clone(),
            model_catalog.clone(),
        ));
        let get_chat_use_case = Arc::new(GetChatUseCase::new(
            deps.chat_repository.clone(),
            deps.message_repository,
        ));
        let get_chat_pdfs_use_case = Arc::new(GetChatPdfsUseCase::new(
            deps.chat_repository.clone(),
            deps.chat_pdf_repository.clone(),
        ));
        let update_chat_pdfs_use_case = Arc::new(UpdateChatPdfsUseCase::new(
            deps.chat_repository,
            deps.chat_pdf_repository,
        ));
        let manage_pdfs_use_case = Arc::new(ManagePdfsUseCase::new(deps.backend));

        // HTTP handlers
        let chat_handler = Arc::new(ChatHandler::new(
            send_message_use_case,
            get_chat_use_case,
            deps.auth_provider.clone(),
            deps.pacing,
        ));
        let chat_pdf_handler = Arc::new(ChatPdfHandler::new(
            get_chat_pdfs_use_case,
            update_chat_pdfs_use_case,
            deps.auth_provider.clone(),
        ));
        let pdf_handler = Arc::new(PdfHandler::new(
            manage_pdfs_use_case,
            model_catalog,
            deps.auth_provider,
        ));

        Self {
            chat_handler,
            chat_pdf_handler,
            pdf_handler,
        }
    }
}

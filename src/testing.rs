//! In-memory stand-ins for the database, backend and auth ports.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::application::ports::inference_backend::{
    ModelInfo, PdfSummary, PdfUploadAck, QueryRequest, QueryResponse,
};
use crate::application::ports::{AuthProvider, InferenceBackend, InferenceError, Session};
use crate::domain::entities::{Chat, ChatPdfLink, Message};
use crate::domain::repositories::{
    ChatPdfRepository, ChatRepository, MessageRepository, RepositoryError,
};

#[derive(Default)]
pub struct StoreState {
    chats: Mutex<Vec<Chat>>,
    messages: Mutex<Vec<Message>>,
    links: Mutex<Vec<ChatPdfLink>>,
}

#[derive(Default, Clone)]
pub struct InMemoryStore {
    state: Arc<StoreState>,
}

impl InMemoryStore {
    pub fn chats(&self) -> Arc<dyn ChatRepository> {
        self.state.clone()
    }

    pub fn messages(&self) -> Arc<dyn MessageRepository> {
        self.state.clone()
    }

    pub fn chat_pdfs(&self) -> Arc<dyn ChatPdfRepository> {
        self.state.clone()
    }

    pub fn insert_chat(&self, chat: Chat) {
        self.state.chats.lock().unwrap().push(chat);
    }

    pub fn insert_message(&self, message: Message) {
        self.state.messages.lock().unwrap().push(message);
    }

    pub fn insert_link(&self, link: ChatPdfLink) {
        self.state.links.lock().unwrap().push(link);
    }

    pub fn chat(&self, id: &str) -> Option<Chat> {
        self.state
            .chats
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned()
    }

    pub fn messages_for(&self, chat_id: &str) -> Vec<Message> {
        self.state
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.chat_id() == chat_id)
            .cloned()
            .collect()
    }

    pub fn links_for(&self, chat_id: &str) -> Vec<String> {
        self.state
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.chat_id() == chat_id)
            .map(|l| l.pdf_id().to_string())
            .collect()
    }
}

#[async_trait]
impl ChatRepository for StoreState {
    async fn find_by_id(&self, id: &str) -> Result<Option<Chat>, RepositoryError> {
        Ok(self.chats.lock().unwrap().iter().find(|c| c.id() == id).cloned())
    }

    async fn save_if_absent(&self, chat: &Chat) -> Result<bool, RepositoryError> {
        let mut chats = self.chats.lock().unwrap();
        if chats.iter().any(|c| c.id() == chat.id()) {
            return Ok(false);
        }
        chats.push(chat.clone());
        Ok(true)
    }
}

#[async_trait]
impl MessageRepository for StoreState {
    async fn save_all(&self, messages: &[Message]) -> Result<(), RepositoryError> {
        self.messages.lock().unwrap().extend_from_slice(messages);
        Ok(())
    }

    async fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<Message>, RepositoryError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.chat_id() == chat_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ChatPdfRepository for StoreState {
    async fn find_by_chat_id(&self, chat_id: &str) -> Result<Vec<ChatPdfLink>, RepositoryError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.chat_id() == chat_id)
            .cloned()
            .collect())
    }

    async fn add(&self, link: &ChatPdfLink) -> Result<(), RepositoryError> {
        let mut links = self.links.lock().unwrap();
        if !links
            .iter()
            .any(|l| l.chat_id() == link.chat_id() && l.pdf_id() == link.pdf_id())
        {
            links.push(link.clone());
        }
        Ok(())
    }

    async fn remove(&self, chat_id: &str, pdf_id: &str) -> Result<bool, RepositoryError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| !(l.chat_id() == chat_id && l.pdf_id() == pdf_id));
        Ok(links.len() < before)
    }

    async fn replace(&self, chat_id: &str, new_links: &[ChatPdfLink]) -> Result<(), RepositoryError> {
        let mut links = self.links.lock().unwrap();
        links.retain(|l| l.chat_id() != chat_id);
        links.extend_from_slice(new_links);
        Ok(())
    }
}

/// Scriptable backend that records every query it receives.
#[derive(Default)]
pub struct FakeBackend {
    answer: Option<QueryResponse>,
    query_failure: Option<String>,
    total_failure: Option<String>,
    models: Vec<ModelInfo>,
    pdfs: Mutex<Vec<PdfSummary>>,
    queries: Mutex<Vec<QueryRequest>>,
}

impl FakeBackend {
    pub fn with_answer(mut self, answer: QueryResponse) -> Self {
        self.answer = Some(answer);
        self
    }

    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = models;
        self
    }

    pub fn failing_queries(mut self, detail: &str) -> Self {
        self.query_failure = Some(detail.to_string());
        self
    }

    pub fn failing(mut self, detail: &str) -> Self {
        self.total_failure = Some(detail.to_string());
        self
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.queries.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), InferenceError> {
        match &self.total_failure {
            Some(detail) => Err(InferenceError::Network(detail.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl InferenceBackend for FakeBackend {
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, InferenceError> {
        self.check_available()?;
        self.queries.lock().unwrap().push(request.clone());

        if let Some(detail) = &self.query_failure {
            return Err(InferenceError::Backend {
                status: 500,
                detail: detail.clone(),
            });
        }

        Ok(self.answer.clone().unwrap_or_else(|| QueryResponse {
            answer: format!("You said: {}", request.question),
            sources: Vec::new(),
            metadata: Default::default(),
            session_id: "session".to_string(),
            message_id: 1,
        }))
    }

    async fn list_pdfs(&self) -> Result<Vec<PdfSummary>, InferenceError> {
        self.check_available()?;
        Ok(self.pdfs.lock().unwrap().clone())
    }

    async fn upload_pdf(
        &self,
        file_name: String,
        _data: Vec<u8>,
    ) -> Result<PdfUploadAck, InferenceError> {
        self.check_available()?;
        let mut pdfs = self.pdfs.lock().unwrap();
        let pdf_id = format!("pdf-{}", pdfs.len() + 1);
        pdfs.push(PdfSummary {
            pdf_id: pdf_id.clone(),
            name: file_name.clone(),
            collection_name: format!("collection_{}", pdf_id),
            upload_timestamp: "2024-01-01T00:00:00".to_string(),
            doc_count: 1,
            page_count: 1,
            is_sample: false,
        });

        Ok(PdfUploadAck {
            pdf_id: pdf_id.clone(),
            name: file_name,
            collection_name: format!("collection_{}", pdf_id),
            doc_count: 1,
            page_count: 1,
            upload_timestamp: "2024-01-01T00:00:00".to_string(),
        })
    }

    async fn delete_pdf(&self, pdf_id: &str) -> Result<(), InferenceError> {
        self.check_available()?;
        let mut pdfs = self.pdfs.lock().unwrap();
        let before = pdfs.len();
        pdfs.retain(|p| p.pdf_id != pdf_id);
        if pdfs.len() == before {
            return Err(InferenceError::Backend {
                status: 404,
                detail: "PDF not found".to_string(),
            });
        }
        Ok(())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, InferenceError> {
        self.check_available()?;
        Ok(self.models.clone())
    }
}

/// Treats the bearer token itself as the user id.
pub struct TokenIsUser;

#[async_trait]
impl AuthProvider for TokenIsUser {
    async fn authenticate(&self, bearer_token: Option<&str>) -> Option<Session> {
        bearer_token.map(|token| Session {
            user_id: token.to_string(),
        })
    }
}

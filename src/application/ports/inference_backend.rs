use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Source;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("{0}")]
    Network(String),
    /// Non-OK reply; the message is the backend's `detail` or the status text.
    #[error("{detail}")]
    Backend { status: u16, detail: String },
    #[error("Invalid backend response: {0}")]
    Parse(String),
}

impl InferenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InferenceError::Backend { status: 404, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub model: String,
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryMetadata {
    #[serde(default)]
    pub model_used: String,
    #[serde(default)]
    pub chunks_retrieved: i64,
    #[serde(default)]
    pub pdfs_queried: i64,
    #[serde(default)]
    pub reasoning_steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub metadata: QueryMetadata,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub message_id: i64,
}

impl QueryResponse {
    pub fn reasoning_steps(&self) -> &[String] {
        self.metadata.reasoning_steps.as_deref().unwrap_or(&[])
    }
}

/// A PDF as listed by the backend, which owns its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfSummary {
    pub pdf_id: String,
    pub name: String,
    #[serde(default)]
    pub collection_name: String,
    pub upload_timestamp: String,
    #[serde(default)]
    pub doc_count: i64,
    #[serde(default)]
    pub page_count: i64,
    #[serde(default)]
    pub is_sample: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfUploadAck {
    pub pdf_id: String,
    pub name: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub doc_count: i64,
    #[serde(default)]
    pub page_count: i64,
    pub upload_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified_at: String,
}

/// The external retrieval and generation service.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, InferenceError>;

    async fn list_pdfs(&self) -> Result<Vec<PdfSummary>, InferenceError>;

    async fn upload_pdf(
        &self,
        file_name: String,
        data: Vec<u8>,
    ) -> Result<PdfUploadAck, InferenceError>;

    async fn delete_pdf(&self, pdf_id: &str) -> Result<(), InferenceError>;

    async fn list_models(&self) -> Result<Vec<ModelInfo>, InferenceError>;
}

use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Response, multipart};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use crate::application::ports::inference_backend::{
    ModelInfo, PdfSummary, PdfUploadAck, QueryRequest, QueryResponse,
};
use crate::application::ports::{InferenceBackend, InferenceError};

#[derive(Debug, Clone)]
pub struct InferenceClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

/// HTTP client for the FastAPI retrieval/generation backend. Calls are made
/// once; a failed call is reported, never retried.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    config: InferenceClientConfig,
}

impl InferenceClient {
    pub fn new(config: InferenceClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, InferenceError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                InferenceError::Network(format!(
                    "Invalid backend URL: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, InferenceError> {
        let response = request
            .send()
            .await
            .map_err(|e| InferenceError::Network(e.without_url().to_string()))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, InferenceError> {
        response
            .json::<T>()
            .await
            .map_err(|e| InferenceError::Parse(e.without_url().to_string()))
    }
}

/// Prefers the backend's `detail` field, falling back to the status text.
async fn error_from_response(response: Response) -> InferenceError {
    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string();

    let detail = match response.json::<serde_json::Value>().await {
        Ok(body) => match body.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(serde_json::Value::Null) | None => fallback,
            Some(other) => other.to_string(),
        },
        Err(_) => fallback,
    };

    error!(status = status.as_u16(), detail = %detail, "Backend request failed");
    InferenceError::Backend {
        status: status.as_u16(),
        detail,
    }
}

#[async_trait]
impl InferenceBackend for InferenceClient {
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, InferenceError> {
        let url = self.endpoint(&["api", "v1", "query"])?;
        debug!(model = %request.model, pdf_ids = ?request.pdf_ids, "Querying backend");

        let response = self.send(self.client.post(url).json(&request)).await?;
        Self::read_json(response).await
    }

    async fn list_pdfs(&self) -> Result<Vec<PdfSummary>, InferenceError> {
        let url = self.endpoint(&["api", "v1", "pdfs"])?;
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    async fn upload_pdf(
        &self,
        file_name: String,
        data: Vec<u8>,
    ) -> Result<PdfUploadAck, InferenceError> {
        let url = self.endpoint(&["api", "v1", "pdfs", "upload"])?;
        let part = multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str("application/pdf")
            .map_err(|e| InferenceError::Network(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self.send(self.client.post(url).multipart(form)).await?;
        Self::read_json(response).await
    }

    async fn delete_pdf(&self, pdf_id: &str) -> Result<(), InferenceError> {
        let url = self.endpoint(&["api", "v1", "pdfs", pdf_id])?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, InferenceError> {
        let url = self.endpoint(&["api", "v1", "models"])?;
        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }
}

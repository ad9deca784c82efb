use std::sync::Arc;
use tracing::info;

use crate::application::errors::PdfError;
use crate::application::ports::InferenceBackend;
use crate::application::ports::inference_backend::{PdfSummary, PdfUploadAck};

/// Listing, uploading and deleting PDFs. The backend owns the documents;
/// this service only forwards requests.
pub struct ManagePdfsUseCase {
    backend: Arc<dyn InferenceBackend>,
}

impl ManagePdfsUseCase {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<PdfSummary>, PdfError> {
        Ok(self.backend.list_pdfs().await?)
    }

    pub async fn upload(&self, file_name: String, data: Vec<u8>) -> Result<PdfUploadAck, PdfError> {
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(PdfError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }
        if data.is_empty() {
            return Err(PdfError::Validation("Uploaded file is empty".to_string()));
        }

        let ack = self.backend.upload_pdf(file_name, data).await?;
        info!(pdf_id = %ack.pdf_id, name = %ack.name, pages = ack.page_count, "Uploaded PDF");
        Ok(ack)
    }

    pub async fn delete(&self, pdf_id: &str) -> Result<(), PdfError> {
        match self.backend.delete_pdf(pdf_id).await {
            Ok(()) => {
                info!(pdf_id, "Deleted PDF");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(PdfError::NotFound(pdf_id.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

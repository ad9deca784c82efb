use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marks a backend-owned PDF as in scope for a chat's retrieval. The PDF id
/// is not checked against the backend; stale ids are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPdfLink {
    chat_id: String,
    pdf_id: String,
    added_at: DateTime<Utc>,
}

impl ChatPdfLink {
    pub fn new(chat_id: String, pdf_id: String) -> Self {
        Self {
            chat_id,
            pdf_id,
            added_at: Utc::now(),
        }
    }

    pub fn restore(chat_id: String, pdf_id: String, added_at: DateTime<Utc>) -> Self {
        Self {
            chat_id,
            pdf_id,
            added_at,
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn pdf_id(&self) -> &str {
        &self.pdf_id
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

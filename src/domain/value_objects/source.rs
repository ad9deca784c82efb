use serde::{Deserialize, Serialize};

/// A retrieved chunk the backend cited for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub pdf_name: String,
    pub pdf_id: String,
    pub chunk_index: i64,
}

impl Source {
    pub fn citation_line(&self) -> String {
        format!("- {} (chunk {})", self.pdf_name, self.chunk_index)
    }
}

//! Decides how a question is answered based on which PDFs are in scope.

/// Words suggesting the user is asking about a document. Plain substring
/// match, so ordinary sentences containing "the" also trigger it.
pub const CONTEXT_KEYWORDS: &[&str] = &[
    "this",
    "the",
    "about the",
    "document",
    "pdf",
    "file",
    "paper",
    "according to",
    "summarize",
    "summary",
];

pub const NO_CONTEXT_WARNING: &str = "📄 **No documents selected**\n\nYour question looks like it refers to a document, but no PDFs are selected for this chat.\n\nTo get an answer grounded in your documents:\n- Upload a PDF from the sidebar\n- Select one or more PDFs for this chat\n- Ask your question again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMode {
    /// Retrieval restricted to these PDFs; the answer lists its sources.
    Rag { pdf_ids: Vec<String> },
    /// Nothing selected for a document question: canned guidance, no backend call.
    NoContextWarning,
    /// Nothing selected and no document wording: unfiltered backend call.
    General,
}

impl ChatMode {
    pub fn decide(question: &str, candidates: Vec<String>) -> Self {
        if !candidates.is_empty() {
            ChatMode::Rag { pdf_ids: candidates }
        } else if needs_document_context(question) {
            ChatMode::NoContextWarning
        } else {
            ChatMode::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::Rag { .. } => "rag",
            ChatMode::NoContextWarning => "no_context_warning",
            ChatMode::General => "general",
        }
    }

    pub fn calls_backend(&self) -> bool {
        !matches!(self, ChatMode::NoContextWarning)
    }

    pub fn pdf_filter(&self) -> Option<Vec<String>> {
        match self {
            ChatMode::Rag { pdf_ids } => Some(pdf_ids.clone()),
            _ => None,
        }
    }
}

pub fn needs_document_context(question: &str) -> bool {
    let lowered = question.to_lowercase();
    CONTEXT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Picks the PDF ids in scope for a turn. Links persisted on the chat win;
/// the client's own selection is only consulted when the chat has none.
pub fn resolve_candidates(persisted: Vec<String>, requested: Option<Vec<String>>) -> Vec<String> {
    let source = if persisted.is_empty() {
        requested.unwrap_or_default()
    } else {
        persisted
    };

    let mut ids: Vec<String> = Vec::with_capacity(source.len());
    for id in source {
        let id = id.trim().to_string();
        if !id.is_empty() && !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

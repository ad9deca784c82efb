use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::use_cases::get_chat::GetChatResponse;
use crate::domain::entities::{Chat, Message};

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChatRequestDto {
    pub id: String,
    pub message: IncomingMessageDto,
    pub selected_chat_model: Option<String>,
    pub selected_visibility_type: Option<String>,
    pub selected_pdf_ids: Option<Vec<String>>,
}

/// The inbound turn. Its `role` is not read: the turn is always stored as
/// a user message.
#[derive(Debug, Deserialize)]
pub struct IncomingMessageDto {
    pub id: Option<String>,
    #[serde(default)]
    pub parts: Vec<Value>,
}

impl IncomingMessageDto {
    /// Text of the first `text` part, if it has any.
    pub fn text_content(&self) -> Option<String> {
        self.parts
            .iter()
            .find(|part| part.get("type").and_then(Value::as_str) == Some("text"))
            .and_then(|part| part.get("text"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PdfIdsDto {
    #[serde(rename = "pdfIds")]
    pub pdf_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PdfIdDto {
    #[serde(rename = "pdfId")]
    pub pdf_id: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessDto {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummaryDto {
    pub id: String,
    pub title: String,
    pub visibility: String,
    pub user_id: String,
    pub created_at: String,
}

impl From<&Chat> for ChatSummaryDto {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id().to_string(),
            title: chat.title().to_string(),
            visibility: chat.visibility().as_str().to_string(),
            user_id: chat.user_id().to_string(),
            created_at: chat.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub role: String,
    pub content: String,
    pub parts: Value,
    pub created_at: String,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role().as_str().to_string(),
            content: message.content().to_string(),
            parts: message.parts().clone(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryDto {
    pub chat: ChatSummaryDto,
    pub messages: Vec<MessageDto>,
}

impl From<GetChatResponse> for ChatHistoryDto {
    fn from(response: GetChatResponse) -> Self {
        Self {
            chat: ChatSummaryDto::from(&response.chat),
            messages: response.messages.iter().map(MessageDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_chat_request_parsing() {
        let body = json!({
            "id": "chat-1",
            "message": {
                "id": "msg-1",
                "role": "user",
                "parts": [
                    {"type": "file", "url": "blob:x"},
                    {"type": "text", "text": "Summarize the paper"}
                ]
            },
            "selectedChatModel": "mistral:7b",
            "selectedPdfIds": ["pdf-1"]
        });

        let dto: PostChatRequestDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.id, "chat-1");
        assert_eq!(dto.selected_chat_model.as_deref(), Some("mistral:7b"));
        assert_eq!(dto.selected_visibility_type, None);
        assert_eq!(dto.selected_pdf_ids, Some(vec!["pdf-1".to_string()]));
        assert_eq!(
            dto.message.text_content().as_deref(),
            Some("Summarize the paper")
        );
    }

    #[test]
    fn test_text_content_requires_non_empty_text_part() {
        let message: IncomingMessageDto = serde_json::from_value(json!({
            "role": "user",
            "parts": [{"type": "text", "text": ""}]
        }))
        .unwrap();
        assert_eq!(message.text_content(), None);

        let message: IncomingMessageDto =
            serde_json::from_value(json!({"role": "user", "parts": []})).unwrap();
        assert_eq!(message.text_content(), None);
    }
}

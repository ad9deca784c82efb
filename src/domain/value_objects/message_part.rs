use serde::{Deserialize, Serialize};

use super::Source;

/// Typed fragment of an assistant message. User messages keep their parts
/// as received, so only the shapes this service writes are modelled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessagePart {
    Text { text: String },
    Reasoning { text: String },
    DataSources { data: Vec<Source> },
}

impl MessagePart {
    pub fn text(text: impl Into<String>) -> Self {
        MessagePart::Text { text: text.into() }
    }

    pub fn reasoning(steps: &[String]) -> Self {
        MessagePart::Reasoning {
            text: steps.join("\n"),
        }
    }
}
